//! Tests for the JSON file history backend.

use onair_core::{GeneratedScript, GenerationSettings, HostComment, ScriptDraft};
use onair_storage::{HISTORY_CAP, JsonFileHistory, ScriptHistory};
use tempfile::TempDir;

fn script(id: &str, timestamp: i64) -> GeneratedScript {
    let draft = ScriptDraft {
        opening: "He came home early for the first time in years.".to_string(),
        intro: "A letter from a listener in his forties.".to_string(),
        body: "Narrator: The lights were already on.".to_string(),
        climax: "Listener: Who left these on?".to_string(),
        ending: "Now he leaves them on himself.".to_string(),
        comment: HostComment {
            empathy: "Coming home is its own kind of courage.".to_string(),
            advice: "Tell them you noticed.".to_string(),
            outro: "Good night, listeners.".to_string(),
        },
        captions: vec!["The lights were on".to_string()],
        thumbnails: vec![
            "Why he came home early".to_string(),
            "The lights upstairs".to_string(),
            "What he found".to_string(),
        ],
        hashtags: vec!["#homecoming".to_string()],
    };
    GeneratedScript::from_draft(draft, id.to_string(), GenerationSettings::default(), timestamp)
}

#[tokio::test]
async fn test_append_and_list_most_recent_first() {
    let temp_dir = TempDir::new().unwrap();
    let history = JsonFileHistory::new(temp_dir.path().join("history.json"));
    history.load().await.unwrap();

    history.append(script("first", 1_000)).await.unwrap();
    history.append(script("second", 2_000)).await.unwrap();
    history.append(script("third", 3_000)).await.unwrap();

    let entries = history.list().await.unwrap();
    let ids: Vec<&str> = entries.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_cap_drops_the_oldest_entries() {
    let temp_dir = TempDir::new().unwrap();
    let history = JsonFileHistory::new(temp_dir.path().join("history.json"));
    history.load().await.unwrap();

    for i in 0..(HISTORY_CAP + 5) {
        history
            .append(script(&format!("id-{i}"), i as i64))
            .await
            .unwrap();
    }

    let entries = history.list().await.unwrap();
    assert_eq!(entries.len(), HISTORY_CAP);
    // Newest first; the five oldest are gone
    assert_eq!(entries[0].id, format!("id-{}", HISTORY_CAP + 4));
    assert_eq!(entries[HISTORY_CAP - 1].id, "id-5");
}

#[tokio::test]
async fn test_remove_preserves_the_order_of_survivors() {
    let temp_dir = TempDir::new().unwrap();
    let history = JsonFileHistory::new(temp_dir.path().join("history.json"));
    history.load().await.unwrap();

    for id in ["a", "b", "c", "d"] {
        history.append(script(id, 0)).await.unwrap();
    }

    history.remove("c").await.unwrap();

    let ids: Vec<String> = history
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["d", "b", "a"]);
}

#[tokio::test]
async fn test_remove_unknown_id_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let history = JsonFileHistory::new(temp_dir.path().join("history.json"));
    history.load().await.unwrap();
    history.append(script("only", 0)).await.unwrap();

    history.remove("missing").await.unwrap();

    let entries = history.list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "only");
}

#[tokio::test]
async fn test_missing_file_loads_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let history = JsonFileHistory::new(temp_dir.path().join("nonexistent.json"));

    history.load().await.unwrap();
    assert!(history.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_file_is_a_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.json");
    tokio::fs::write(&path, b"not json at all").await.unwrap();

    let history = JsonFileHistory::new(&path);
    let result = history.load().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_entries_survive_a_new_instance() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.json");

    {
        let history = JsonFileHistory::new(&path);
        history.load().await.unwrap();
        history.append(script("persisted", 42)).await.unwrap();
    }

    let reopened = JsonFileHistory::new(&path);
    reopened.load().await.unwrap();

    let entries = reopened.list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "persisted");
    assert_eq!(entries[0].timestamp, 42);
    assert_eq!(entries[0], script("persisted", 42));
}

#[tokio::test]
async fn test_clear_empties_both_memory_and_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("history.json");

    let history = JsonFileHistory::new(&path);
    history.load().await.unwrap();
    history.append(script("gone", 0)).await.unwrap();

    history.clear().await.unwrap();
    assert!(history.list().await.unwrap().is_empty());

    let reopened = JsonFileHistory::new(&path);
    reopened.load().await.unwrap();
    assert!(reopened.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_parent_directories_are_created_on_first_write() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("deep").join("history.json");

    let history = JsonFileHistory::new(&path);
    history.load().await.unwrap();
    history.append(script("nested", 0)).await.unwrap();

    assert!(path.exists());
}
