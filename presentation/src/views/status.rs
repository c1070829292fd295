//! End-user view of their latest consultation

use colored::Colorize;
use consult_application::ConsultationStore;
use consult_domain::{ConsultationStatus, UserId};
use std::sync::Arc;

/// Read-only status view for the viewer's most recent consultation
pub struct StatusView {
    store: Arc<ConsultationStore>,
    user_id: UserId,
}

impl StatusView {
    pub fn new(store: Arc<ConsultationStore>, user_id: UserId) -> Self {
        Self { store, user_id }
    }

    /// Render the viewer's latest consultation status.
    ///
    /// Shows the localized status label, the rejection reason when the
    /// consultation was rejected, and a submit prompt when the viewer has
    /// no consultation at all.
    pub async fn render(&self) -> String {
        let Some(consultation) = self.store.latest_for_user(self.user_id).await else {
            return format!(
                "{}\n{}\n",
                "Belum ada permintaan konsultasi.",
                "Ajukan konsultasi dengan perintah `submit` untuk memulai."
            );
        };

        let label = match consultation.status() {
            ConsultationStatus::Pending => consultation.status().label().yellow(),
            ConsultationStatus::Approved => consultation.status().label().green(),
            ConsultationStatus::Rejected => consultation.status().label().red(),
        };

        let mut output = format!(
            "Konsultasi #{} ({}): {}\n",
            consultation.id(),
            consultation.consultation_date(),
            label.bold()
        );
        if let Some(reason) = consultation.rejection_reason() {
            output.push_str(&format!("Alasan: {}\n", reason));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use consult_application::InMemoryBackend;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> Arc<ConsultationStore> {
        Arc::new(ConsultationStore::new(Arc::new(InMemoryBackend::new())))
    }

    #[tokio::test]
    async fn test_no_consultation_renders_submit_prompt() {
        let view = StatusView::new(store(), UserId::new(10));
        let rendered = view.render().await;
        assert!(rendered.contains("Belum ada permintaan konsultasi."));
        assert!(rendered.contains("submit"));
    }

    #[tokio::test]
    async fn test_pending_consultation_shows_localized_label() {
        let store = store();
        store
            .submit_with_today(UserId::new(10), date(2026, 9, 15), date(2026, 8, 27))
            .await
            .unwrap();

        let view = StatusView::new(store, UserId::new(10));
        let rendered = view.render().await;
        assert!(rendered.contains("Menunggu"));
    }

    #[tokio::test]
    async fn test_rejected_consultation_shows_reason() {
        let store = store();
        let c = store
            .submit_with_today(UserId::new(10), date(2026, 9, 15), date(2026, 8, 27))
            .await
            .unwrap();
        store.reject(c.id(), "Jadwal tidak tersedia").await.unwrap();

        let view = StatusView::new(store, UserId::new(10));
        let rendered = view.render().await;
        assert!(rendered.contains("Ditolak"));
        assert!(rendered.contains("Alasan: Jadwal tidak tersedia"));
    }

    #[tokio::test]
    async fn test_latest_consultation_wins() {
        let store = store();
        let first = store
            .submit_with_today(UserId::new(10), date(2026, 9, 15), date(2026, 8, 27))
            .await
            .unwrap();
        store.approve(first.id()).await.unwrap();
        store
            .submit_with_today(UserId::new(10), date(2026, 10, 1), date(2026, 8, 27))
            .await
            .unwrap();

        let view = StatusView::new(store, UserId::new(10));
        let rendered = view.render().await;
        assert!(rendered.contains("Menunggu"));
        assert!(rendered.contains("2026-10-01"));
    }
}
