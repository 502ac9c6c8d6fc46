pub(crate) mod models;

use crate::openai::models::{ApiError, ChatMessage, ChatRequest, ChatResponse};
use crate::{Config, NippoAiError, NippoAiResult, Summarizer};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str =
    "あなたは事実のみを正確に要約する専門家です。推測や創作を一切排除します。";

pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

impl Summarizer for OpenAiClient {
    async fn summarize(&self, server_log: &str, target_date: &str) -> NippoAiResult<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            // Report content must be extraction, not creativity.
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(server_log, target_date),
                },
            ],
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        // Check status before parsing
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %body, "OpenAI API error");
            return Err(NippoAiError::Api(format!("{status}: {body}")));
        }

        let response = response.json::<ChatResponse>().await?;

        if let Some(ApiError { message }) = response.error {
            return Err(NippoAiError::Api(message));
        }

        Ok(response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_else(|| "No report generated.".to_string()))
    }
}

// TODO: make the template configurable
pub(crate) fn build_prompt(server_log: &str, target_date: &str) -> String {
    format!(
        r#"
あなたはこども園の主任保育士です。
提供された2日間分のログを読み、**【{target_date}】（当日）の分だけ**を業務日報としてまとめてください。

【重要：抽出と記載のルール】
1. **重要事項の見逃し厳禁**: 「明日」「確認」「依頼」「検討」「お願い」「TODO」など、次に行うべきアクションが含まれる発言はできる限り拾ってください。
2. **「明日以降への申し送り」の重視**: 当日のログの中で、翌日以降の予定やタスクに関する内容はすべてこのセクションに集約してください。
3. **事実のみを記載**: ログにある言葉だけを使用してください。AIが「〜を予定しています」「〜の準備をしましょう」のように勝手に文章を膨らませたり、推測で肉付けしたりすることは一切禁止です。アドバイス、架空の活動の付け足しは一切禁止です。
4. **情報の鮮度**: 前日のログは背景としてのみ使い、日報の中身は必ず当日の事実で構成してください。
5. **記載がない場合は飛ばす**: ログに情報がないクラスや項目は、空欄を埋めるために創作せず、項目ごと削除するか「特記事項なし」としてください。
6. **呼称について**: 職員には〇〇先生、預かっている人には〇〇としてください。
7. **重複の禁止**: 同じ内容を複数のセクションに書かないでください。
8. **クラス情報の徹底移動**: ログ内に特定のクラス名（ぞう、きりん等）が含まれる出来事は、必ず「■ クラス別の報告」に記載し、「園全体のトピック」には含めないでください。
9. **discord idが名前でない場合**: そのままdiscord idのまま〇〇先生と書いてください。
10. **職員の用意**: 明日以降への申し送りで、指定の持ち物および指定する服装での出勤が必要な場合必ず記載すること(対象者も記載すること。)

【構成】
■ **職員の勤怠**
（{target_date}の欠席・遅刻等の事実のみ。〇〇先生の形式で記載）

■ **園全体のトピック**
（{target_date}に行われた決定・報告・行事の事実のみ）

■ **クラス別の報告**
（クラス名：出席/欠席状況。{target_date}のログにある具体的な活動や園児の様子。ログに記載がない活動は絶対に書かないこと）

■ **フォーラム・掲示板の動き**
（{target_date}に書き込まれた議論・決定事項のみ）

■ **明日以降への申し送り**
（今日解決しなかったタスクや、明示されている連絡事項のみ）

--- ログデータ ---
{server_log}
"#
    )
}
