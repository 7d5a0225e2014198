//! Startup fetch of the four collections.

use store::{Collections, DataService, StoreError};

use super::AppState;

/// Fetch all four collections concurrently. The first failure fails the
/// whole fetch and the other results are dropped.
pub async fn fetch_collections<S: DataService>(service: &S) -> Result<Collections, StoreError> {
    let (users, leads, developers, training) = futures::try_join!(
        service.get_users(),
        service.get_leads(),
        service.get_developers(),
        service.get_training(),
    )?;
    Ok(Collections {
        users,
        leads,
        developers,
        training,
    })
}

impl AppState {
    /// Apply the bootstrap result and mark data as loaded, whatever happened.
    pub fn finish_bootstrap(&mut self, fetched: Result<Collections, StoreError>) {
        match fetched {
            Ok(collections) => {
                tracing::info!(
                    users = collections.users.len(),
                    leads = collections.leads.len(),
                    developers = collections.developers.len(),
                    training = collections.training.len(),
                    "bootstrap fetch complete"
                );
                self.collections.apply(collections);
            }
            Err(e) => tracing::warn!("bootstrap fetch failed, keeping bundled data: {e}"),
        }
        self.data_loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{Collection, ScriptedService};
    use store::defaults::default_notifications;
    use store::{Lead, LeadStatus};

    fn state() -> AppState {
        AppState::new(Collections::bundled(), default_notifications())
    }

    fn lead(id: &str) -> Lead {
        Lead {
            id: id.into(),
            name: "Remote lead".into(),
            phone: "555".into(),
            email: None,
            status: LeadStatus::New,
            source: "Site".into(),
            interest: None,
            budget: None,
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_single_failure_keeps_all_defaults() {
        for failing in Collection::ALL {
            let service = ScriptedService::new()
                .with_leads(vec![lead("remote")])
                .failing(failing);
            let mut app = state();

            let fetched = fetch_collections(&service).await;
            assert!(fetched.is_err());
            app.finish_bootstrap(fetched);

            assert!(app.data_loaded);
            assert_eq!(app.collections, Collections::bundled(), "{failing:?}");
        }
    }

    #[tokio::test]
    async fn test_empty_keeps_default_and_non_empty_replaces() {
        let remote = vec![lead("remote-1"), lead("remote-2")];
        let service = ScriptedService::new().with_leads(remote.clone());
        let mut app = state();

        app.finish_bootstrap(fetch_collections(&service).await);

        let bundled = Collections::bundled();
        assert_eq!(app.collections.leads, remote);
        assert_eq!(app.collections.users, bundled.users);
        assert_eq!(app.collections.developers, bundled.developers);
        assert_eq!(app.collections.training, bundled.training);
        assert!(app.data_loaded);
    }

    #[tokio::test]
    async fn test_fetch_queries_every_collection() {
        let service = ScriptedService::new();
        fetch_collections(&service).await.unwrap();
        assert_eq!(service.calls(), 4);
    }
}
