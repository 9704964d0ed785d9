use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use relateiq_client::presentation::serialization::{from_epoch_millis, to_epoch_millis};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Stamped {
    #[serde(with = "relateiq_client::presentation::serialization::epoch_millis")]
    at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct MaybeStamped {
    #[serde(
        default,
        with = "relateiq_client::presentation::serialization::epoch_millis_opt"
    )]
    at: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Joined {
    #[serde(with = "relateiq_client::presentation::serialization::comma_separated")]
    ids: Vec<String>,
}

#[test]
fn test_epoch_millis_round_trip() {
    let samples: [i64; 8] = [
        0,
        1,
        999,
        1_000,
        123_000,
        1_414_001_420_560,
        4_102_444_800_000,
        253_402_300_799_999,
    ];
    for millis in samples {
        let decoded = from_epoch_millis(millis).unwrap();
        assert_eq!(to_epoch_millis(&decoded), millis);

        let json = format!(r#"{{"at":{millis}}}"#);
        let stamped: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(serde_json::to_string(&stamped).unwrap(), json);
    }
}

#[test]
fn test_epoch_millis_round_trip_truncates_to_millis() {
    let precise = Utc.timestamp_opt(1_600_000_000, 123_456_789).unwrap();
    let stamped = Stamped { at: precise };
    let json = serde_json::to_string(&stamped).unwrap();
    assert_eq!(json, r#"{"at":1600000000123}"#);

    let decoded: Stamped = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.at, Utc.timestamp_opt(1_600_000_000, 123_000_000).unwrap());
}

#[test]
fn test_epoch_millis_decodes_as_utc_regardless_of_origin_zone() {
    let madrid = FixedOffset::east_opt(2 * 3600).unwrap();
    let local = madrid.with_ymd_and_hms(2014, 10, 22, 20, 10, 20).unwrap();
    let stamped = Stamped {
        at: local.with_timezone(&Utc),
    };
    let json = serde_json::to_string(&stamped).unwrap();
    let decoded: Stamped = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.at.to_rfc3339(), "2014-10-22T18:10:20+00:00");
}

#[test]
fn test_epoch_millis_rejects_non_integers() {
    for json in [r#"{"at":"1000"}"#, r#"{"at":1.25}"#, r#"{"at":null}"#, r#"{"at":true}"#] {
        assert!(serde_json::from_str::<Stamped>(json).is_err(), "{json}");
    }
}

#[test]
fn test_epoch_millis_rejects_out_of_range() {
    let json = format!(r#"{{"at":{}}}"#, i64::MAX);
    let err = serde_json::from_str::<Stamped>(&json).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_epoch_millis_opt() {
    let some: MaybeStamped = serde_json::from_str(r#"{"at":1000}"#).unwrap();
    assert_eq!(some.at, Some(Utc.timestamp_opt(1, 0).unwrap()));
    assert_eq!(serde_json::to_string(&some).unwrap(), r#"{"at":1000}"#);

    let null: MaybeStamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
    assert_eq!(null.at, None);
    assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"at":null}"#);

    let missing: MaybeStamped = serde_json::from_str("{}").unwrap();
    assert_eq!(missing.at, None);
}

#[test]
fn test_comma_separated() {
    let joined = Joined {
        ids: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };
    let json = serde_json::to_string(&joined).unwrap();
    assert_eq!(json, r#"{"ids":"a,b,c"}"#);
    assert_eq!(serde_json::from_str::<Joined>(&json).unwrap(), joined);

    let empty: Joined = serde_json::from_str(r#"{"ids":""}"#).unwrap();
    assert!(empty.ids.is_empty());
}
