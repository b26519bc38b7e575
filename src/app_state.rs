use crate::database::AccountStore;

pub struct AppState {
    pub db: Box<dyn AccountStore>,
}

impl AppState {
    pub fn new(db: impl AccountStore + 'static) -> Self {
        AppState { db: Box::new(db) }
    }
}
