use client::forms::StatusQueryForm;
use client::{Page, Screen, SubmissionOutcome};

use crate::common::TestApp;

mod lookup {
    use super::*;

    #[tokio::test]
    async fn known_comp_id_shows_status_and_members() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;
        controller.navigate(Page::StatusQuery).await;

        let form = StatusQueryForm { id: "C9".into() };
        form.submit(|id| async move { controller.query(&id).await })
            .await
            .unwrap();

        let Screen::StatusResult(view) = controller.screen().await else {
            panic!("expected result screen");
        };
        assert_eq!(view.field("Status"), Some("approved"));
        assert_eq!(view.field("Members"), Some("A, B"));
        assert!(view.field("Email").is_none());
    }

    #[tokio::test]
    async fn known_quiz_id_shows_applicant_details() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;

        controller.query("Q123").await;

        let Some(SubmissionOutcome::QuerySuccess { id, data }) = controller.outcome().await else {
            panic!("expected query success");
        };
        assert_eq!(id, "Q123");
        assert_eq!(data.status, "under review");
        let Screen::StatusResult(view) = controller.screen().await else {
            panic!("expected result screen");
        };
        assert_eq!(view.field("Applicant / team"), Some("Ada"));
        assert_eq!(view.field("Answers"), Some("42"));
    }

    #[tokio::test]
    async fn unknown_id_is_a_query_error() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;

        controller.query("nope").await;

        assert_eq!(controller.current_page().await, Page::StatusResult);
        assert_eq!(controller.outcome().await, Some(SubmissionOutcome::QueryError));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_query_error() {
        let app = TestApp::spawn().await;
        let controller = &app.unreachable_controller().await;

        controller.query("C9").await;

        assert_eq!(controller.current_page().await, Page::StatusResult);
        assert_eq!(controller.outcome().await, Some(SubmissionOutcome::QueryError));
    }

    #[tokio::test]
    async fn id_is_sent_as_a_single_encoded_segment() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;

        controller.query("a b/c").await;

        assert_eq!(app.received(|r| r.status_ids.clone()), vec!["a b/c"]);
        assert!(matches!(
            controller.outcome().await,
            Some(SubmissionOutcome::QuerySuccess { .. })
        ));
    }

    #[tokio::test]
    async fn empty_id_is_rejected_before_any_request() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;

        let form = StatusQueryForm::default();
        let result = form
            .submit(|id| async move { controller.query(&id).await })
            .await;

        assert!(result.is_err());
        assert!(app.received(|r| r.status_ids.is_empty()));
    }
}

mod navigation {
    use super::*;

    #[tokio::test]
    async fn leaving_the_result_page_clears_the_outcome() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;
        controller.query("C9").await;

        controller.navigate(Page::Home).await;

        assert!(controller.outcome().await.is_none());
        controller.navigate(Page::StatusResult).await;
        assert_eq!(controller.current_page().await, Page::Home);
    }
}
