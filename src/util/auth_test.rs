use super::*;
use crate::routes::{GAME_PATH, HOME_PATH, RULE_PATH};

fn signed_in() -> AuthState {
    AuthState {
        is_authenticated: true,
        username: "alice".to_owned(),
        user_avatar: "a.png".to_owned(),
        restoring: false,
    }
}

#[test]
fn should_redirect_unauth_on_guarded_route() {
    assert!(should_redirect_unauth(&AuthState::default(), GAME_PATH));
}

#[test]
fn should_not_redirect_on_public_routes() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state, HOME_PATH));
    assert!(!should_redirect_unauth(&state, RULE_PATH));
    assert!(!should_redirect_unauth(&state, LANDING_PATH));
}

#[test]
fn should_not_redirect_while_restoring() {
    let state = AuthState { restoring: true, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state, GAME_PATH));
}

#[test]
fn should_not_redirect_when_user_signed_in() {
    assert!(!should_redirect_unauth(&signed_in(), GAME_PATH));
}

// =============================================================
// install_unauth_redirect effect
// =============================================================

mod redirect_effect {
    use std::cell::RefCell;
    use std::rc::Rc;

    use any_spawner::Executor;
    use tokio::task::LocalSet;

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        paths: Rc<RefCell<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.paths.borrow_mut().push(path.to_owned());
        }
    }

    #[tokio::test]
    async fn redirect_waits_for_restore_then_fires_on_game() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let auth = RwSignal::new(AuthState { restoring: true, ..AuthState::default() });
                let nav = RecordingNavigator::default();
                install_unauth_redirect(auth, GAME_PATH, nav.clone());

                Executor::tick().await;
                assert!(nav.paths.borrow().is_empty());

                auth.update(|s| s.restoring = false);
                Executor::tick().await;
                assert_eq!(*nav.paths.borrow(), vec![LANDING_PATH.to_owned()]);
            })
            .await;
    }

    #[tokio::test]
    async fn redirect_does_not_fire_when_restore_signs_in() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let auth = RwSignal::new(AuthState { restoring: true, ..AuthState::default() });
                let nav = RecordingNavigator::default();
                install_unauth_redirect(auth, GAME_PATH, nav.clone());

                Executor::tick().await;
                auth.set(signed_in());
                Executor::tick().await;
                assert!(nav.paths.borrow().is_empty());
            })
            .await;
    }

    #[tokio::test]
    async fn redirect_never_fires_on_public_route() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let auth = RwSignal::new(AuthState::default());
                let nav = RecordingNavigator::default();
                install_unauth_redirect(auth, HOME_PATH, nav.clone());

                Executor::tick().await;
                assert!(nav.paths.borrow().is_empty());
            })
            .await;
    }
}
