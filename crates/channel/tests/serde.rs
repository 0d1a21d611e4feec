use sluice_channel::ChannelParameters;

#[test]
fn parameters_round_trip_through_json() {
    let params = ChannelParameters::new(15.5, 5.1, 2.5, 1.5, 0.05, 0.005).unwrap();

    let json = serde_json::to_value(params).unwrap();
    assert_eq!(json["left_slope"], 2.5);
    assert_eq!(json["manning_n"], 0.05);

    let back: ChannelParameters = serde_json::from_value(json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn invalid_json_parameters_are_rejected() {
    let json = r#"{
        "discharge": 15.5,
        "bottom_width": 0.0,
        "left_slope": 0.0,
        "right_slope": 0.0,
        "manning_n": 0.05,
        "bed_slope": 0.005
    }"#;

    let err = serde_json::from_str::<ChannelParameters>(json).unwrap_err();
    assert!(err.to_string().contains("no flow area"));
}
