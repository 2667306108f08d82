use client::forms::AdminLoginForm;
use client::{DashboardState, DashboardView, Page, Screen};

use client::controller::LOGIN_FAILED;

use crate::common::{ADMIN_PASSWORD, ADMIN_TOKEN, TestApp};

mod login {
    use super::*;

    #[tokio::test]
    async fn correct_password_opens_the_dashboard_and_persists_the_session() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;
        controller.open_admin_login().await;

        let form = AdminLoginForm {
            password: ADMIN_PASSWORD.into(),
        };
        form.submit(|password| async move { controller.admin_login(&password).await })
            .await
            .unwrap();

        assert!(controller.is_authenticated().await);
        assert_eq!(controller.current_page().await, Page::AdminDashboard);
        assert_eq!(
            controller.screen().await,
            Screen::AdminDashboard {
                token: ADMIN_TOKEN.into()
            }
        );

        let reloaded = app.controller().await;
        assert!(reloaded.is_authenticated().await);
        assert!(reloaded.nav_items().await.contains(&Page::AdminDashboard));
    }

    #[tokio::test]
    async fn wrong_password_stays_on_the_login_page() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;
        controller.open_admin_login().await;

        controller.admin_login("wrong").await;

        assert!(!controller.is_authenticated().await);
        assert_eq!(controller.current_page().await, Page::AdminLogin);
        assert!(controller.notice().await.is_some());
        assert!(!app.controller().await.is_authenticated().await);
    }

    #[tokio::test]
    async fn unreachable_server_fails_login_in_place() {
        let app = TestApp::spawn().await;
        let controller = &app.unreachable_controller().await;
        controller.open_admin_login().await;

        controller.admin_login(ADMIN_PASSWORD).await;

        assert!(!controller.is_authenticated().await);
        assert_eq!(controller.current_page().await, Page::AdminLogin);
        assert!(controller.outcome().await.is_none());
        assert_eq!(controller.notice().await.unwrap().message, LOGIN_FAILED);
    }

    #[tokio::test]
    async fn logout_survives_a_reload() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;
        controller.admin_login(ADMIN_PASSWORD).await;

        controller.logout().await.unwrap();

        assert_eq!(controller.current_page().await, Page::Home);
        assert!(!app.controller().await.is_authenticated().await);
    }
}

mod dashboard {
    use super::*;

    #[tokio::test]
    async fn lists_applications_with_the_bearer_token() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;
        controller.admin_login(ADMIN_PASSWORD).await;

        let mut dashboard = controller.mount_dashboard().await.unwrap();
        dashboard.load().await;

        let DashboardView::Entries(entries) = dashboard.view() else {
            panic!("expected entries, got {:?}", dashboard.state());
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].heading, "Quiz application (ID: Q1)");
        assert_eq!(entries[1].heading, "Competition application (ID: 2)");
        assert!(dashboard.view().to_string().contains("Competition details: finals"));
        assert_eq!(
            app.received(|r| r.bearer_tokens.clone()),
            vec![Some(ADMIN_TOKEN.to_string())]
        );
    }

    #[tokio::test]
    async fn rejected_token_is_reported_without_signing_out() {
        let app = TestApp::spawn().await;
        controller_with_stale_token(&app).await;
        let controller = &app.controller().await;
        assert!(controller.is_authenticated().await);

        let mut dashboard = controller.mount_dashboard().await.unwrap();
        let state = dashboard.load().await;

        assert!(matches!(
            state,
            DashboardState::Failed {
                auth_expired: true,
                ..
            }
        ));
        assert!(controller.is_authenticated().await);
    }

    #[tokio::test]
    async fn no_dashboard_without_a_session() {
        let app = TestApp::spawn().await;
        let controller = &app.controller().await;

        controller.navigate(Page::AdminDashboard).await;

        assert_eq!(controller.screen().await, Screen::Blank);
        assert!(controller.mount_dashboard().await.is_none());
        assert!(app.received(|r| r.bearer_tokens.is_empty()));
    }

    async fn controller_with_stale_token(app: &TestApp) {
        let controller = &app.controller().await;
        controller
            .set_session(Some("expired".into()))
            .await
            .unwrap();
    }
}
