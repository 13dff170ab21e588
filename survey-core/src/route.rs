pub const POINT_ID_PARAM: &str = "point_id";
pub const QUESTION_ID_PARAM: &str = "question_id";

/// Identifiers carried by `/dashboard/survey/:point_id/:question_id`.
/// Both are opaque and never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurveyRoute {
    pub divergence_point_id: String,
    pub question_id: String,
}

impl SurveyRoute {
    pub fn new(divergence_point_id: impl Into<String>, question_id: impl Into<String>) -> Self {
        Self {
            divergence_point_id: divergence_point_id.into(),
            question_id: question_id.into(),
        }
    }

    /// Build from a param lookup. Missing params become empty strings.
    pub fn from_params<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            divergence_point_id: lookup(POINT_ID_PARAM).unwrap_or_default(),
            question_id: lookup(QUESTION_ID_PARAM).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_both_params() {
        let route = SurveyRoute::from_params(|k| match k {
            "point_id" => Some("dp-1".into()),
            "question_id" => Some("q-9".into()),
            _ => None,
        });
        assert_eq!(route, SurveyRoute::new("dp-1", "q-9"));
    }

    #[test]
    fn missing_params_are_empty() {
        let route = SurveyRoute::from_params(|_| None);
        assert_eq!(route.divergence_point_id, "");
        assert_eq!(route.question_id, "");
    }
}
