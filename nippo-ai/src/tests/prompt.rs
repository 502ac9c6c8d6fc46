use crate::openai::build_prompt;
use crate::openai::models::{ChatMessage, ChatRequest};

#[test]
fn test_prompt_embeds_date_and_log() {
    let prompt = build_prompt("[03/01 09:00] tanaka: 出席です\n", "2025/03/01");

    assert!(prompt.contains("【2025/03/01】"));
    assert!(prompt.contains("[03/01 09:00] tanaka: 出席です"));
    assert!(prompt.contains("--- ログデータ ---"));
}

#[test]
fn test_prompt_demands_all_five_sections() {
    let prompt = build_prompt("log", "2025/03/01");

    assert!(prompt.contains("■ **職員の勤怠**"));
    assert!(prompt.contains("■ **園全体のトピック**"));
    assert!(prompt.contains("■ **クラス別の報告**"));
    assert!(prompt.contains("■ **フォーラム・掲示板の動き**"));
    assert!(prompt.contains("■ **明日以降への申し送り**"));
}

#[test]
fn test_prompt_forbids_fabrication() {
    let prompt = build_prompt("log", "2025/03/01");

    assert!(prompt.contains("事実のみを記載"));
    assert!(prompt.contains("推測で肉付け"));
}

#[test]
fn test_chat_request_serializes_deterministic_roles() {
    let request = ChatRequest {
        model: "gpt-4o".to_string(),
        temperature: 0.0,
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: "sys".to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: "usr".to_string(),
            },
        ],
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["temperature"], 0.0);
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["role"], "user");
}
