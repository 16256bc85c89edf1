//! Tests for the settings endpoints.

use cellar::{
    model::settings::{SettingsDto, UpdateSettingDto},
    server::controller::settings::{get_settings, update_setting},
};

use super::*;

fn value(value: &str) -> Json<UpdateSettingDto> {
    Json(UpdateSettingDto {
        value: value.to_string(),
    })
}

/// Expect defaults for every setting when nothing is stored
#[tokio::test]
async fn returns_defaults() -> Result<(), TestError> {
    let test = TestBuilder::new().with_settings_table().build().await?;

    let resp = get_settings(State(test.to_app_state::<AppState>()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let settings: SettingsDto = body_json(resp).await;
    assert_eq!(settings.default_bottle_size, "STANDARD");
    assert_eq!(settings.currency, "USD");
    assert_eq!(settings.currency_symbol, "$");
    assert_eq!(settings.low_quantity_threshold, 2.0);
    assert_eq!(settings.sort_by, "name");
    assert_eq!(settings.view_style, "list");
    assert!(settings.show_prices);
    assert!(settings.show_drinking_window);

    Ok(())
}

/// Expect 204 and the new values reflected by a following read
#[tokio::test]
async fn updates_settings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_settings_table().build().await?;

    for (key, raw) in [
        ("show_prices", "false"),
        ("low_quantity_threshold", "5"),
        ("currency", "EUR"),
    ] {
        let resp = update_setting(
            State(test.to_app_state::<AppState>()),
            Path(key.to_string()),
            value(raw),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let resp = get_settings(State(test.to_app_state::<AppState>()))
        .await
        .into_response();
    let settings: SettingsDto = body_json(resp).await;
    assert!(!settings.show_prices);
    assert_eq!(settings.low_quantity_threshold, 5.0);
    assert_eq!(settings.currency, "EUR");
    assert_eq!(settings.currency_symbol, "€");

    Ok(())
}

/// Expect 400 for a key outside the settings schema
#[tokio::test]
async fn rejects_unknown_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_settings_table().build().await?;

    let resp = update_setting(
        State(test.to_app_state::<AppState>()),
        Path("theme".to_string()),
        value("dark"),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("theme"));

    Ok(())
}

/// Expect 400 when the value does not parse under the setting's kind
#[tokio::test]
async fn rejects_invalid_value() -> Result<(), TestError> {
    let test = TestBuilder::new().with_settings_table().build().await?;

    for (key, raw) in [("low_quantity_threshold", "plenty"), ("show_prices", "yes")] {
        let resp = update_setting(
            State(test.to_app_state::<AppState>()),
            Path(key.to_string()),
            value(raw),
        )
        .await
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    Ok(())
}
