use webmify::media::probe::ProbeResult;

#[test]
fn test_parses_ffprobe_format_duration() {
    let json = r#"{
        "streams": [
            {"index": 0, "codec_type": "video", "codec_name": "h264"},
            {"index": 1, "codec_type": "audio", "codec_name": "aac"}
        ],
        "format": {
            "filename": "ep1.mkv",
            "duration": "1433.069000",
            "size": "356247552",
            "bit_rate": "1988742"
        }
    }"#;
    let result: ProbeResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.duration_secs(), Some(1433.069));
    assert_eq!(result.streams.len(), 2);
}

#[test]
fn test_missing_duration_field_is_unknown() {
    let json = r#"{"format": {"filename": "ep1.mkv"}, "streams": []}"#;
    let result: ProbeResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.duration_secs(), None);
}

#[test]
fn test_missing_format_object_is_unknown() {
    let json = r#"{"streams": []}"#;
    let result: ProbeResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.duration_secs(), None);
}

#[test]
fn test_unparseable_duration_is_unknown() {
    let json = r#"{"format": {"duration": "N/A"}}"#;
    let result: ProbeResult = serde_json::from_str(json).unwrap();
    assert_eq!(result.duration_secs(), None);
}

#[test]
fn test_malformed_json_is_an_error() {
    let result: Result<ProbeResult, _> = serde_json::from_str("not json at all");
    assert!(result.is_err());
}
