use colored::*;
use crate::core::data::{Prediction, SentimentLabel};

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Color a piece of text by the direction of a sentiment label
    pub fn sentiment(label: SentimentLabel, text: &str) -> ColoredString {
        match label {
            SentimentLabel::VeryNegative => text.bright_red().bold(),
            SentimentLabel::Negative => text.red(),
            SentimentLabel::Neutral => text.clear(),
            SentimentLabel::Positive => text.green(),
            SentimentLabel::VeryPositive => text.bright_green().bold(),
        }
    }

    pub fn header_separator() -> String {
        "═".repeat(40)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>16}: {}", Self::label(label), value);
    }

    pub fn print_prediction(prediction: &Prediction) {
        let line = format_prediction(prediction);
        println!("{}", Self::sentiment(prediction.sentiment, &line));
    }
}

/// Render a prediction as `"<label> (<score>)"` with two decimals
pub fn format_prediction(prediction: &Prediction) -> String {
    format!("{} ({:.2})", prediction.sentiment, prediction.score)
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_prediction_two_decimals() {
        let prediction = Prediction {
            sentiment: SentimentLabel::VeryNegative,
            score: -0.9,
        };
        assert_eq!(format_prediction(&prediction), "Very Negative (-0.90)");

        let prediction = Prediction {
            sentiment: SentimentLabel::Positive,
            score: 0.416_666_666_666_666_7,
        };
        assert_eq!(format_prediction(&prediction), "Positive (0.42)");
    }

    #[test]
    fn test_format_prediction_neutral_zero() {
        let prediction = Prediction {
            sentiment: SentimentLabel::Neutral,
            score: 0.0,
        };
        assert_eq!(format_prediction(&prediction), "Neutral (0.00)");
    }
}
