//! Measurements recorded during the sonar distance lab

/// Expected tokens paired with the distances actually measured
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Nominal distances as written on the lab sheet
    pub expected_tokens: Vec<String>,
    /// Measured distances in centimetres
    pub actual: Vec<f64>,
}

impl Dataset {
    /// Creates a dataset from tokens and measured values
    pub fn new<I, S>(expected_tokens: I, actual: Vec<f64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_tokens: expected_tokens.into_iter().map(Into::into).collect(),
            actual,
        }
    }

    /// The ten readings taken for the lab report
    pub fn lab() -> Self {
        Self::new(
            [
                "5cm", "7cm", "60", "50cm", "9cm", "11cm", "13cm", "15cm", "17cm", "19cm",
            ],
            vec![
                6.88, 9.97, 61.41, 51.67, 10.77, 12.57, 14.57, 16.54, 18.91, 20.70,
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lab_dataset_is_paired() {
        let dataset = Dataset::lab();
        assert_eq!(dataset.expected_tokens.len(), 10);
        assert_eq!(dataset.actual.len(), 10);
        assert_eq!(dataset.expected_tokens[2], "60");
        assert_eq!(dataset.actual[9], 20.70);
    }
}
