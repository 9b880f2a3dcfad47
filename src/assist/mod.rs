//! Assistant client for the hosted generative language API
//!
//! Thin pass-through around the `generateContent` endpoint: a prompt
//! template per operation, no streaming, no history. Failures never
//! propagate as crashes; callers receive the localized message that the
//! presentation layer shows in place of the reply.

mod types;

use log::warn;
use reqwest::Client;

use crate::error::Error;
use crate::state::Student;

pub use types::{GenerateRequest, GenerateResponse};

const MODEL_NAME: &str = "gemini-2.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the generative language API.
pub struct AssistClient {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl AssistClient {
    /// Create an assistant client. The API key is opaque configuration
    /// supplied by the embedding application.
    pub fn new(api_key: &str, http_client: Client) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            http_client,
        }
    }

    /// Point the client at a different API host.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Short principal's comment for a student performance report.
    pub async fn student_report(&self, student: &Student) -> Result<String, Error> {
        let prompt = format!(
            "Bertindak sebagai pengetua sekolah yang profesional dan penyayang.\n\
             Sila tulis ulasan ringkas (maksimum 100 patah perkataan) untuk laporan prestasi pelajar berikut dalam Bahasa Melayu.\n\n\
             Nama: {}\n\
             Kelas: {}\n\
             Kehadiran: {}%\n\
             Markah Purata: {}\n\
             Skor Kelakuan (1-10): {}\n\n\
             Berikan nasihat yang membina berdasarkan data di atas.",
            student.name, student.grade, student.attendance, student.average_score, student.behavior_score,
        );
        self.generate(prompt, "Tiada ulasan dapat dijana.", "Gagal menjana laporan. Sila cuba lagi.")
            .await
    }

    /// Daily lesson plan (RPH) in Markdown for the given subject, topic
    /// and duration.
    pub async fn lesson_plan(&self, subject: &str, topic: &str, duration: &str) -> Result<String, Error> {
        let prompt = format!(
            "Bina satu rancangan pengajaran harian (RPH) ringkas untuk guru sekolah menengah.\n\
             Subjek: {subject}\n\
             Topik: {topic}\n\
             Masa: {duration}\n\n\
             Format output dalam Markdown (gunakan bullet points). Sertakan Objektif, Aktiviti, dan Penutup.\n\
             Bahasa: Bahasa Melayu.",
        );
        self.generate(prompt, "Tiada rancangan dapat dijana.", "Gagal menjana RPH.")
            .await
    }

    /// Free-form chat with the school assistant persona.
    pub async fn chat(&self, message: &str) -> Result<String, Error> {
        let prompt = format!(
            "Anda adalah 'Cikgu AI', pembantu maya pintar untuk sistem pengurusan sekolah 'e-Sekolah PINTAR'.\n\
             Jawab soalan pengguna berkaitan pengurusan sekolah, pedagogi, atau motivasi pelajar.\n\
             Jawab dalam Bahasa Melayu yang sopan dan profesional.\n\n\
             Soalan: {message}",
        );
        self.generate(prompt, "Maaf, saya tidak faham.", "Ralat sistem AI.").await
    }

    /// Issue one `generateContent` call. A reply with no usable text
    /// resolves to `fallback`; any transport or API failure is logged and
    /// surfaced as the localized `failure` message.
    async fn generate(
        &self,
        prompt: String,
        fallback: &'static str,
        failure: &'static str,
    ) -> Result<String, Error> {
        let url = format!("{}/models/{}:generateContent", self.base_url, MODEL_NAME);
        let request = GenerateRequest::from_prompt(prompt);

        let response = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                warn!("assistant request failed: {err}");
                Error::assist(failure)
            })?;

        if !response.status().is_success() {
            warn!("assistant request rejected with status {}", response.status());
            return Err(Error::assist(failure));
        }

        let reply: GenerateResponse = response.json().await.map_err(|err| {
            warn!("assistant reply could not be decoded: {err}");
            Error::assist(failure)
        })?;

        Ok(reply.text().unwrap_or_else(|| fallback.to_string()))
    }
}
