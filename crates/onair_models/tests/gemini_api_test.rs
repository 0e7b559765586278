use onair_core::{GenerateRequest, ModelTier, Schema};
use onair_interface::OnairDriver;
use onair_models::GeminiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn test_gemini_json_mode_generation() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = GeminiClient::new()?;

    let request = GenerateRequest::new(
        "Reply with a JSON object whose field named answer holds the word yes.".to_string(),
        Schema::object([("answer", Schema::string())]),
        ModelTier::Light,
    );

    let value = client.generate_json(&request).await?;

    assert!(
        value.get("answer").and_then(|v| v.as_str()).is_some(),
        "Should receive an object with a string answer field"
    );
    println!("Response: {}", value);

    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn test_gemini_schema_constrains_array_output() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let client = GeminiClient::new()?;

    let request = GenerateRequest::new(
        "List three colors.".to_string(),
        Schema::array(Schema::object([("name", Schema::string())])),
        ModelTier::Light,
    );

    let value = client.generate_json(&request).await?;

    let items = value.as_array().expect("Should receive a JSON array");
    assert!(!items.is_empty());
    for item in items {
        assert!(item.get("name").and_then(|v| v.as_str()).is_some());
    }

    Ok(())
}
