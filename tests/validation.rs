use good_seat_api::{
    config::AppConfig,
    dto::reviews::SubmitReviewRequest,
    error::AppError,
};
use uuid::Uuid;

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".into(),
        host: "127.0.0.1".into(),
        port: 3000,
        cors_origin: "http://localhost:5173".into(),
        screen_types: ["Standard", "Digital", "Laser", "Dolby", "IMAX", "RPX"]
            .into_iter()
            .map(String::from)
            .collect(),
        session_user_id: Uuid::nil(),
    }
}

fn base_request() -> SubmitReviewRequest {
    SubmitReviewRequest {
        theatre_name: "Grand Palace Cinemas".into(),
        screen_type: "dolby".into(),
        auditorium_number: 1,
        row: "j".into(),
        seat_number: 15,
        notes: Some("great view".into()),
        recommend: Some("on".into()),
    }
}

#[test]
fn valid_submission_is_normalized() {
    let config = test_config();
    let valid = base_request().validate(&config).expect("valid submission");

    assert_eq!(valid.theatre_name, "Grand Palace Cinemas");
    assert_eq!(valid.screen_type, "Dolby");
    assert_eq!(valid.seat_row, "J");
    assert_eq!(valid.seat_number, 15);
    assert_eq!(valid.notes.as_deref(), Some("great view"));
    assert!(valid.recommend);
}

#[test]
fn theatre_name_is_trimmed() {
    let config = test_config();
    let mut request = base_request();
    request.theatre_name = "  The Odeon Multiplex  ".into();

    let valid = request.validate(&config).expect("valid submission");
    assert_eq!(valid.theatre_name, "The Odeon Multiplex");
}

#[test]
fn blank_theatre_name_is_rejected() {
    let config = test_config();
    let mut request = base_request();
    request.theatre_name = "   ".into();

    let err = request.validate(&config).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn unknown_screen_type_is_rejected() {
    let config = test_config();
    let mut request = base_request();
    request.screen_type = "Drive-In".into();

    let err = request.validate(&config).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn screen_type_matching_is_case_insensitive() {
    let config = test_config();
    for raw in ["imax", "IMAX", "Imax", " imax "] {
        let mut request = base_request();
        request.screen_type = raw.into();
        let valid = request.validate(&config).expect("valid submission");
        assert_eq!(valid.screen_type, "IMAX");
    }
}

#[test]
fn non_positive_seat_number_is_rejected() {
    let config = test_config();
    for seat_number in [0, -3] {
        let mut request = base_request();
        request.seat_number = seat_number;
        let err = request.validate(&config).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[test]
fn non_positive_auditorium_number_is_rejected() {
    let config = test_config();
    let mut request = base_request();
    request.auditorium_number = 0;

    let err = request.validate(&config).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn blank_seat_row_is_rejected() {
    let config = test_config();
    let mut request = base_request();
    request.row = " ".into();

    let err = request.validate(&config).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn absent_checkbox_means_not_recommended() {
    let config = test_config();
    let mut request = base_request();
    request.recommend = None;

    let valid = request.validate(&config).expect("valid submission");
    assert!(!valid.recommend);
}

#[test]
fn empty_notes_become_none() {
    let config = test_config();
    let mut request = base_request();
    request.notes = Some("   ".into());

    let valid = request.validate(&config).expect("valid submission");
    assert_eq!(valid.notes, None);
}
