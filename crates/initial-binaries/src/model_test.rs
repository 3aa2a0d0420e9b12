use crate::error::SampleError;
use crate::model::{EccentricityModel, PeriodModel, PrimaryModel, StarFormationModel};

#[test]
fn parses_configuration_names() {
    assert_eq!("kroupa93".parse::<PrimaryModel>(), Ok(PrimaryModel::Kroupa93));
    assert_eq!("salpeter55".parse::<PrimaryModel>(), Ok(PrimaryModel::Salpeter55));
    assert_eq!("Han".parse::<PeriodModel>(), Ok(PeriodModel::Han));
    assert_eq!("log_normal".parse::<PeriodModel>(), Ok(PeriodModel::LogNormal));
    assert_eq!("thermal".parse::<EccentricityModel>(), Ok(EccentricityModel::Thermal));
    assert_eq!("uniform".parse::<EccentricityModel>(), Ok(EccentricityModel::Uniform));
    assert_eq!("const".parse::<StarFormationModel>(), Ok(StarFormationModel::Constant));
    assert_eq!("burst".parse::<StarFormationModel>(), Ok(StarFormationModel::Burst));
}

#[test]
fn display_matches_parsed_name() {
    for name in ["kroupa93", "salpeter55"] {
        assert_eq!(name.parse::<PrimaryModel>().unwrap().to_string(), name);
    }
    for name in ["Han", "log_normal"] {
        assert_eq!(name.parse::<PeriodModel>().unwrap().to_string(), name);
    }
}

#[test]
fn names_are_case_sensitive() {
    assert!("han".parse::<PeriodModel>().is_err());
    assert!("Thermal".parse::<EccentricityModel>().is_err());
}

#[test]
fn unknown_model_lists_alternatives() {
    let err = "kroupa01".parse::<PrimaryModel>().unwrap_err();

    assert_eq!(
        err,
        SampleError::UnknownModel {
            kind: "primary mass",
            given: "kroupa01".to_owned(),
            expected: &["kroupa93", "salpeter55"],
        }
    );
    assert_eq!(
        err.to_string(),
        r#"unknown primary mass model "kroupa01", expected one of ["kroupa93", "salpeter55"]"#
    );
}

#[test]
fn serde_uses_configuration_names() {
    assert_eq!(
        serde_json::to_string(&PeriodModel::LogNormal).unwrap(),
        r#""log_normal""#
    );
    assert_eq!(
        serde_json::to_string(&StarFormationModel::Constant).unwrap(),
        r#""const""#
    );

    let parsed: EccentricityModel = serde_json::from_str(r#""uniform""#).unwrap();
    assert_eq!(parsed, EccentricityModel::Uniform);
    assert!(serde_json::from_str::<PrimaryModel>(r#""Kroupa93""#).is_err());
}

#[test]
fn defaults() {
    assert_eq!(PrimaryModel::default(), PrimaryModel::Kroupa93);
    assert_eq!(PeriodModel::default(), PeriodModel::Han);
    assert_eq!(EccentricityModel::default(), EccentricityModel::Thermal);
    assert_eq!(StarFormationModel::default(), StarFormationModel::Constant);
}
