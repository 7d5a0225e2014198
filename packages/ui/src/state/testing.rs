use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use store::{DataService, Developer, Lead, StoreError, TrainingModule, User};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Users,
    Leads,
    Developers,
    Training,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Users,
        Collection::Leads,
        Collection::Developers,
        Collection::Training,
    ];

    fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Leads => "leads",
            Collection::Developers => "developers",
            Collection::Training => "training",
        }
    }
}

/// Service double with canned reads, one optional failing collection and a
/// call counter.
#[derive(Clone, Default)]
pub struct ScriptedService {
    leads: Vec<Lead>,
    failing: Option<Collection>,
    unconfigured: bool,
    calls: Arc<AtomicUsize>,
    saved_users: Arc<Mutex<Vec<User>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_leads(mut self, leads: Vec<Lead>) -> Self {
        self.leads = leads;
        self
    }

    pub fn failing(mut self, collection: Collection) -> Self {
        self.failing = Some(collection);
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.unconfigured = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn saved_users(&self) -> Vec<User> {
        self.saved_users.lock().unwrap().clone()
    }

    fn hit(&self, collection: Collection) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing == Some(collection) {
            return Err(StoreError::Remote(format!("{} unavailable", collection.name())));
        }
        Ok(())
    }
}

impl DataService for ScriptedService {
    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        self.hit(Collection::Users)?;
        Ok(Vec::new())
    }

    async fn get_leads(&self) -> Result<Vec<Lead>, StoreError> {
        self.hit(Collection::Leads)?;
        Ok(self.leads.clone())
    }

    async fn get_developers(&self) -> Result<Vec<Developer>, StoreError> {
        self.hit(Collection::Developers)?;
        Ok(Vec::new())
    }

    async fn get_training(&self) -> Result<Vec<TrainingModule>, StoreError> {
        self.hit(Collection::Training)?;
        Ok(Vec::new())
    }

    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        self.hit(Collection::Users)?;
        self.saved_users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn save_leads(&self, _leads: &[Lead]) -> Result<(), StoreError> {
        self.hit(Collection::Leads)
    }

    async fn save_developers(&self, _developers: &[Developer]) -> Result<(), StoreError> {
        self.hit(Collection::Developers)
    }

    async fn save_training(&self, _modules: &[TrainingModule]) -> Result<(), StoreError> {
        self.hit(Collection::Training)
    }

    fn is_configured(&self) -> bool {
        !self.unconfigured
    }
}
