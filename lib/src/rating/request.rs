use crate::error::VTrumpfStaerkeError;
use crate::primitives::*;
use crate::rating::params::*;
use crate::rules::{classify, ESolo};
use crate::util::*;
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, new)]
pub struct SRating {
    #[serde(rename = "trumpfs")]
    pub veccard_trumpf: Vec<ECard>,
    #[serde(rename = "trumpfstaerke")]
    pub f_trumpfstaerke: f64,
}

/// A hand together with the flags describing the deal it belongs to.
#[derive(Clone, Debug, PartialEq, new)]
pub struct SRatingRequest {
    pub vecrawcard: Vec<SRawCard>,
    pub b_bock: bool,
    pub b_schweinchen: bool,
    pub esolo: ESolo,
}

impl SRatingRequest {
    /// Decodes `{"hand": [2, 15, ...], "bock": false, "schweinchen": false, "solo": "n"}`.
    pub fn from_json(str_json: &str) -> Result<SRatingRequest, VTrumpfStaerkeError> {
        let jsonval = serde_json::from_str::<Value>(str_json)
            .map_err(|err| VTrumpfStaerkeError::invalid_argument_type(format!("request has to be a JSON object: {}", err)))?;
        if !jsonval.is_object() {
            return Err(VTrumpfStaerkeError::invalid_argument_type("request has to be a JSON object."));
        }
        let vecrawcard = match jsonval.get("hand") {
            Some(Value::Array(vecjsonval_card)) => vecjsonval_card.iter()
                .map(|jsonval_card| jsonval_card.as_i64()
                    .ok_or_else(|| VTrumpfStaerkeError::invalid_argument_type(format!("hand has to be list of integers, found {}.", jsonval_card)))
                    .and_then(SRawCard::try_from)
                )
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(VTrumpfStaerkeError::invalid_argument_type("hand has to be list.")),
        };
        let read_flag = |str_key: &str| {
            jsonval.get(str_key)
                .and_then(Value::as_bool)
                .ok_or_else(|| VTrumpfStaerkeError::invalid_argument_type(format!("{} has to be bool.", str_key)))
        };
        let b_bock = read_flag("bock")?;
        let b_schweinchen = read_flag("schweinchen")?;
        let esolo = match jsonval.get("solo") {
            None | Some(Value::Null) => ESolo::Normal,
            Some(Value::String(str_solo)) => ESolo::parse_lenient(str_solo),
            Some(_) => return Err(VTrumpfStaerkeError::invalid_argument_type("solo has to be string.")),
        };
        Ok(SRatingRequest::new(vecrawcard, b_bock, b_schweinchen, esolo))
    }

    pub fn evaluate(&self, params: &STrumpfStaerkeParams) -> SRating {
        let veccard_trumpf = classify(&self.vecrawcard, self.esolo);
        let f_trumpfstaerke = params.trumpfstaerke(&veccard_trumpf, self.b_bock, self.b_schweinchen, self.esolo);
        SRating::new(veccard_trumpf, f_trumpfstaerke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ECard::*;

    fn assert_invalid(str_json: &str) {
        assert!(
            matches!(SRatingRequest::from_json(str_json), Err(VTrumpfStaerkeError::InvalidArgumentType(_))),
            "{}",
            str_json,
        );
    }

    #[test]
    fn test_from_json() {
        let request = SRatingRequest::from_json(r#"{"hand": [23, 23, 24, 1], "bock": true, "schweinchen": false, "solo": "H"}"#).unwrap();
        assert_eq!(request.vecrawcard.iter().map(|rawcard| rawcard.get()).collect::<Vec<_>>(), vec![23, 23, 24, 1]);
        assert!(request.b_bock);
        assert!(!request.b_schweinchen);
        assert_eq!(request.esolo, ESolo::Herz);
        let request = SRatingRequest::from_json(r#"{"hand": [], "bock": false, "schweinchen": true}"#).unwrap();
        assert_eq!(request.esolo, ESolo::Normal);
        assert!(request.vecrawcard.is_empty());
        // unknown solo degrades to a normal game
        assert_eq!(
            SRatingRequest::from_json(r#"{"hand": [], "bock": false, "schweinchen": false, "solo": "X"}"#).map(|request| request.esolo),
            Ok(ESolo::Normal),
        );
    }

    #[test]
    fn test_from_json_invalid_argument_type() {
        assert_invalid("");
        assert_invalid("[1, 2]");
        assert_invalid(r#"{"hand": 23, "bock": false, "schweinchen": false}"#);
        assert_invalid(r#"{"hand": [23, "EO"], "bock": false, "schweinchen": false}"#);
        assert_invalid(r#"{"hand": [23, 2.5], "bock": false, "schweinchen": false}"#);
        assert_invalid(r#"{"hand": [23, 25], "bock": false, "schweinchen": false}"#);
        assert_invalid(r#"{"hand": [23], "bock": 1, "schweinchen": false}"#);
        assert_invalid(r#"{"hand": [23], "bock": false}"#);
        assert_invalid(r#"{"hand": [23], "bock": false, "schweinchen": "no"}"#);
        assert_invalid(r#"{"hand": [23], "bock": false, "schweinchen": false, "solo": 3}"#);
    }

    #[test]
    fn test_evaluate() {
        let params = STrumpfStaerkeParams::default();
        let rating = SRatingRequest::from_json(r#"{"hand": [1, 16, 23, 24], "bock": false, "schweinchen": false, "solo": "F"}"#)
            .unwrap()
            .evaluate(&params);
        assert_eq!(rating, SRating::new(vec![], 0.));
        let rating = SRatingRequest::from_json(r#"{"hand": [20, 21, 22, 23, 20, 21, 22, 23], "bock": false, "schweinchen": false, "solo": "O"}"#)
            .unwrap()
            .evaluate(&params);
        assert_eq!(rating.veccard_trumpf, vec![SO, HO, BO, EO, SO, HO, BO, EO]);
        assert_eq!(rating.f_trumpfstaerke, 100.);
    }

    #[test]
    fn test_rating_json() {
        let rating = SRating::new(vec![EO, HZ], 12.5);
        assert_eq!(
            serde_json::to_string(&rating).unwrap(),
            r#"{"trumpfs":["EO","H10"],"trumpfstaerke":12.5}"#,
        );
    }
}
