//! End-to-end flows through the App controller.
//!
//! Commands go in through `handle_command`, spawned requests hit a recording
//! mock, and replies are applied by pumping the app's message channel.

mod common;

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;

use common::{app_with_mock, labrador_json, poodle_json, pump_one, recipe_json, url};
use petpal::adapters::{MockHttpClient, MockResponse};
use petpal::api::{
    CHATBOT_PATH, DIETARY_OPTIONS_PATH, GENERATE_MORE_PATH, POPULAR_BREEDS_PATH,
    PREDICT_IMAGE_PATH, PREDICT_TEXT_PATH,
};
use petpal::app::{App, AppMessage, Focus};
use petpal::error::ErrorCategory;
use petpal::input::{Command, CommandRegistry, InputContext};
use petpal::startup::ConnectionStatus;
use petpal::state::{InputMode, CHAT_FALLBACK_MESSAGE};
use petpal::traits::{RequestBody, Response};

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_command(Command::InsertChar(c));
    }
}

fn mount_reference_data(mock: &MockHttpClient) {
    mock.set_response(
        &url(DIETARY_OPTIONS_PATH),
        MockResponse::json(json!(["Low-Fat", "Grain-Free", "Raw"])),
    );
    mock.set_response(
        &url(POPULAR_BREEDS_PATH),
        MockResponse::Success(Response::new(
            200,
            r#"{"Poodle": "Smart", "Labrador Retriever": "Friendly"}"#,
        )),
    );
}

/// Load reference data and show a Poodle result in text mode.
async fn app_showing_poodle() -> (MockHttpClient, App) {
    let (mock, mut app) = app_with_mock();
    mock.set_response(&url(PREDICT_TEXT_PATH), MockResponse::json(poodle_json()));

    app.handle_command(Command::SwitchMode(InputMode::Text));
    type_text(&mut app, "Poodle");
    app.handle_command(Command::Activate);
    pump_one(&mut app).await;

    assert_eq!(
        app.selection.breed_result().map(|r| r.breed.as_str()),
        Some("Poodle")
    );
    (mock, app)
}

#[tokio::test]
async fn test_reference_data_populates_pickers() {
    let (mock, mut app) = app_with_mock();
    mount_reference_data(&mock);

    app.start_reference_data_load();
    let msg = pump_one(&mut app).await;
    assert!(matches!(msg, AppMessage::ReferenceDataLoaded(_)));

    assert_eq!(app.dietary_options, vec!["Low-Fat", "Grain-Free", "Raw"]);
    assert_eq!(
        app.popular_breeds.names().collect::<Vec<_>>(),
        vec!["Poodle", "Labrador Retriever"]
    );
    assert_eq!(app.startup.connection, ConnectionStatus::Connected);
}

#[tokio::test]
async fn test_failed_reference_data_leaves_pickers_empty() {
    let (mock, mut app) = app_with_mock();
    mock.set_default_response(MockResponse::status(500, json!({"detail": "down"})));

    app.start_reference_data_load();
    pump_one(&mut app).await;

    assert!(app.dietary_options.is_empty());
    assert!(app.popular_breeds.is_empty());
    assert_eq!(app.startup.connection, ConnectionStatus::Failed);
    assert!(app.notification.is_none());
}

#[tokio::test]
async fn test_text_search_with_dietary_filters() {
    let (mock, mut app) = app_with_mock();
    mount_reference_data(&mock);
    mock.set_response(&url(PREDICT_TEXT_PATH), MockResponse::json(labrador_json()));

    app.start_reference_data_load();
    pump_one(&mut app).await;

    app.handle_command(Command::SwitchMode(InputMode::Text));
    app.handle_command(Command::FocusPrev);
    assert_eq!(app.focus, Focus::Dietary);
    app.handle_command(Command::Toggle);
    app.handle_command(Command::MoveRight);
    app.handle_command(Command::Toggle);
    app.handle_command(Command::FocusNext);
    assert_eq!(app.focus, Focus::Input);

    type_text(&mut app, "  Labrador Retriever ");
    app.handle_command(Command::Activate);
    assert!(app.selection.is_loading());

    pump_one(&mut app).await;

    let requests = mock.requests_to(PREDICT_TEXT_PATH);
    assert_eq!(requests.len(), 1);
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body.form_value("breed"), Some("Labrador Retriever"));
    assert_eq!(body.form_value("dietary_options"), Some("Low-Fat,Grain-Free"));

    let result = app.selection.breed_result().unwrap();
    assert_eq!(result.confidence_label(), "92.0%");
    assert_eq!(app.selection.recipes().len(), 2);
    assert!(!app.selection.is_loading());
    assert_eq!(
        app.chat.as_ref().map(|c| c.breed()),
        Some("Labrador Retriever")
    );
}

#[tokio::test]
async fn test_popular_breed_pick_runs_search() {
    let (mock, mut app) = app_with_mock();
    mount_reference_data(&mock);
    mock.set_response(&url(PREDICT_TEXT_PATH), MockResponse::json(labrador_json()));

    app.start_reference_data_load();
    pump_one(&mut app).await;

    app.handle_command(Command::SwitchMode(InputMode::Text));
    app.handle_command(Command::FocusNext);
    assert_eq!(app.focus, Focus::PopularBreeds);
    app.handle_command(Command::MoveDown);
    app.handle_command(Command::Activate);

    assert_eq!(app.breed_input, "Labrador Retriever");
    pump_one(&mut app).await;

    let requests = mock.requests_to(PREDICT_TEXT_PATH);
    assert_eq!(
        requests[0].body.as_ref().unwrap().form_value("breed"),
        Some("Labrador Retriever")
    );
}

#[tokio::test]
async fn test_blank_breed_is_rejected_without_request() {
    let (mock, mut app) = app_with_mock();

    app.handle_command(Command::SwitchMode(InputMode::Text));
    type_text(&mut app, "   ");
    app.handle_command(Command::Activate);

    assert!(mock.get_requests().is_empty());
    let notification = app.notification.as_ref().unwrap();
    assert_eq!(notification.category, ErrorCategory::Validation);
    assert!(!app.selection.is_loading());
}

#[tokio::test]
async fn test_generate_more_replaces_recipes() {
    let (mock, mut app) = app_showing_poodle().await;
    mock.set_response(
        &url(GENERATE_MORE_PATH),
        MockResponse::json(json!([
            recipe_json("Fresh One"),
            recipe_json("Fresh Two"),
            recipe_json("Fresh Three")
        ])),
    );

    app.handle_command(Command::GenerateMore);
    pump_one(&mut app).await;

    let requests = mock.requests_to(GENERATE_MORE_PATH);
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body.form_value("breed"), Some("Poodle"));
    assert_eq!(body.form_value("count"), Some("3"));

    let titles: Vec<&str> = app
        .selection
        .recipes()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Fresh One", "Fresh Two", "Fresh Three"]);
    assert_eq!(app.recipe_scroll, 0);
    assert_eq!(
        app.selection.breed_result().map(|r| r.breed.as_str()),
        Some("Poodle")
    );
}

#[tokio::test]
async fn test_generate_more_failure_keeps_recipes() {
    let (mock, mut app) = app_showing_poodle().await;
    mock.set_response(
        &url(GENERATE_MORE_PATH),
        MockResponse::status(500, json!({"detail": "Model overloaded"})),
    );

    app.handle_command(Command::GenerateMore);
    pump_one(&mut app).await;

    assert_eq!(app.selection.recipes().len(), 1);
    assert_eq!(app.selection.recipes()[0].title, "Chicken Rice Bowl");
    assert!(!app.selection.is_loading());

    let notification = app.notification.as_ref().unwrap();
    assert_eq!(notification.message, "Model overloaded");
    assert_eq!(notification.category, ErrorCategory::Server);

    app.handle_command(Command::DismissNotification);
    assert!(app.notification.is_none());
}

#[tokio::test]
async fn test_chat_answer_and_fallback() {
    let (mock, mut app) = app_showing_poodle().await;
    mock.set_response(
        &url(CHATBOT_PATH),
        MockResponse::json(json!({"answer": "About one cup twice a day."})),
    );

    app.focus = Focus::Chat;
    type_text(&mut app, "How much should I feed?");
    app.handle_command(Command::Activate);
    assert!(app.chat_input.is_empty());
    assert!(app.chat.as_ref().unwrap().is_pending());

    pump_one(&mut app).await;

    let requests = mock.requests_to(CHATBOT_PATH);
    assert_eq!(
        requests[0].body,
        Some(RequestBody::Json(
            json!({"breed": "Poodle", "question": "How much should I feed?"})
        ))
    );
    let chat = app.chat.as_ref().unwrap();
    assert_eq!(chat.messages().len(), 2);
    assert_eq!(chat.messages()[1].content, "About one cup twice a day.");

    mock.set_response(
        &url(CHATBOT_PATH),
        MockResponse::status(500, json!({"detail": "boom"})),
    );
    type_text(&mut app, "And treats?");
    app.handle_command(Command::Activate);
    pump_one(&mut app).await;

    let chat = app.chat.as_ref().unwrap();
    assert_eq!(chat.messages().len(), 4);
    assert_eq!(chat.messages()[3].content, CHAT_FALLBACK_MESSAGE);
    assert!(!chat.is_pending());
    assert!(app.notification.is_none());
}

#[tokio::test]
async fn test_mode_switch_drops_stale_search_result() {
    let (mock, mut app) = app_with_mock();
    mock.set_response(&url(PREDICT_TEXT_PATH), MockResponse::json(labrador_json()));

    app.handle_command(Command::SwitchMode(InputMode::Text));
    type_text(&mut app, "Labrador Retriever");
    app.handle_command(Command::Activate);
    app.handle_command(Command::SwitchMode(InputMode::Image));

    let msg = pump_one(&mut app).await;
    assert!(matches!(msg, AppMessage::BreedSearched { .. }));

    assert_eq!(app.selection.mode(), InputMode::Image);
    assert!(app.selection.breed_result().is_none());
    assert!(app.selection.recipes().is_empty());
    assert!(app.chat.is_none());
    assert!(app.notification.is_none());
}

#[tokio::test]
async fn test_mode_switch_drops_pending_chat_reply() {
    let (mock, mut app) = app_showing_poodle().await;
    mock.set_response(
        &url(CHATBOT_PATH),
        MockResponse::json(json!({"answer": "late"})),
    );

    app.focus = Focus::Chat;
    type_text(&mut app, "Grain free?");
    app.handle_command(Command::Activate);
    app.handle_command(Command::SwitchMode(InputMode::Text));

    pump_one(&mut app).await;
    assert!(app.chat.is_none());
    assert!(app.selection.breed_result().is_none());
    assert_eq!(app.focus, Focus::Input);
}

#[tokio::test]
async fn test_image_flow_load_then_analyze() {
    let (mock, mut app) = app_with_mock();
    mock.set_response(
        &url(PREDICT_IMAGE_PATH),
        MockResponse::json(json!([labrador_json(), poodle_json()])),
    );

    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .unwrap();
    file.write_all(b"\x89PNG not really a png").unwrap();
    let path = file.path().display().to_string();

    app.handle_paste(&format!("'{}'\n", path));
    assert_eq!(app.image_path_input, path);
    app.handle_command(Command::Activate);
    assert!(app.image_loading);

    let msg = pump_one(&mut app).await;
    assert!(matches!(msg, AppMessage::ImageLoaded { .. }));
    assert!(!app.image_loading);
    assert!(app.image_path_input.is_empty());
    assert!(app.selection.analyze_offered());
    assert!(mock.get_requests().is_empty());

    app.handle_command(Command::AnalyzeImage);
    pump_one(&mut app).await;

    let requests = mock.requests_to(PREDICT_IMAGE_PATH);
    match requests[0].body.as_ref() {
        Some(RequestBody::Multipart(form)) => {
            assert_eq!(form.text_value("dietary_options"), None);
        }
        other => panic!("expected multipart body, got {:?}", other),
    }
    assert_eq!(
        app.selection.breed_result().map(|r| r.breed.as_str()),
        Some("Labrador Retriever")
    );
    assert!(app.chat.is_some());
}

fn image_file(suffix: &str, contents: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents).unwrap();
    file
}

#[tokio::test]
async fn test_picker_is_locked_while_analyzing() {
    let (mock, mut app) = app_with_mock();
    mock.set_response(
        &url(PREDICT_IMAGE_PATH),
        MockResponse::json(json!([labrador_json()])),
    );
    let first = image_file(".png", b"first");
    let second = image_file(".png", b"second");

    app.load_image(first.path());
    pump_one(&mut app).await;
    let first_name = app.selection.image().unwrap().file_name.clone();

    app.handle_command(Command::AnalyzeImage);
    assert!(app.selection.is_loading());

    app.handle_paste(&second.path().display().to_string());
    app.handle_command(Command::Activate);
    assert!(!app.image_loading);
    app.load_image(second.path());
    assert!(!app.image_loading);

    let msg = pump_one(&mut app).await;
    assert!(matches!(msg, AppMessage::BreedAnalyzed { .. }));
    assert_eq!(
        app.selection.image().map(|i| i.file_name.as_str()),
        Some(first_name.as_str())
    );
    assert_eq!(
        app.selection.breed_result().map(|r| r.breed.as_str()),
        Some("Labrador Retriever")
    );
    assert_eq!(mock.requests_to(PREDICT_IMAGE_PATH).len(), 1);
}

#[tokio::test]
async fn test_typed_home_path_is_expanded() {
    let (_mock, mut app) = app_with_mock();
    let home = dirs::home_dir().unwrap();
    let mut file = tempfile::Builder::new()
        .suffix(".jpg")
        .tempfile_in(&home)
        .unwrap();
    file.write_all(b"jpeg").unwrap();
    let name = file.path().file_name().unwrap().to_string_lossy().into_owned();

    type_text(&mut app, &format!("~/{}", name));
    app.handle_command(Command::Activate);
    pump_one(&mut app).await;

    assert!(app.notification.is_none());
    assert_eq!(
        app.selection.image().map(|i| i.file_name.as_str()),
        Some(name.as_str())
    );
}

#[tokio::test]
async fn test_analyze_without_image_is_validation_error() {
    let (mock, mut app) = app_with_mock();

    app.handle_command(Command::AnalyzeImage);

    assert!(mock.get_requests().is_empty());
    assert_eq!(
        app.notification.as_ref().map(|n| n.category),
        Some(ErrorCategory::Validation)
    );
}

#[tokio::test]
async fn test_empty_image_file_is_rejected() {
    let (_mock, mut app) = app_with_mock();
    let file = tempfile::Builder::new()
        .suffix(".jpg")
        .tempfile()
        .unwrap();

    app.load_image(file.path());
    pump_one(&mut app).await;

    assert!(app.selection.image().is_none());
    assert_eq!(
        app.notification.as_ref().map(|n| n.category),
        Some(ErrorCategory::Validation)
    );
}

#[tokio::test]
async fn test_no_candidates_keeps_previous_state() {
    let (mock, mut app) = app_with_mock();
    mock.set_response(&url(PREDICT_IMAGE_PATH), MockResponse::json(json!([])));

    let mut file = tempfile::Builder::new()
        .suffix(".jpg")
        .tempfile()
        .unwrap();
    file.write_all(b"jpeg").unwrap();
    app.load_image(file.path());
    pump_one(&mut app).await;

    app.handle_command(Command::AnalyzeImage);
    pump_one(&mut app).await;

    assert!(app.selection.breed_result().is_none());
    assert!(!app.selection.is_loading());
    assert!(app.notification.is_some());
}

#[tokio::test]
async fn test_keys_drive_a_search() {
    let (mock, mut app) = app_with_mock();
    mock.set_response(&url(PREDICT_TEXT_PATH), MockResponse::json(poodle_json()));
    let registry = CommandRegistry::new();

    let keys = [KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)]
        .into_iter()
        .chain(
            "Poodle"
                .chars()
                .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        )
        .chain([KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)]);

    for key in keys {
        let context = InputContext::new(app.focus).with_notification(app.notification.is_some());
        if let Some(cmd) = registry.dispatch(key, &context) {
            app.handle_command(cmd);
        }
    }
    pump_one(&mut app).await;

    assert_eq!(app.selection.mode(), InputMode::Text);
    assert_eq!(
        app.selection.breed_result().map(|r| r.breed.as_str()),
        Some("Poodle")
    );

    let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
    let context = InputContext::new(app.focus);
    if let Some(cmd) = registry.dispatch(ctrl_q, &context) {
        app.handle_command(cmd);
    }
    assert!(app.should_quit);
}
