#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bloodbank_app_core::app_core::AppStore;
use bloodbank_app_core::domain::AppState;
use bloodbank_app_core::kernel::AppKernel;
use bloodbank_app_core::ports::{DonorBackend, TextGenerator};
use bloodbank_core::{BloodType, Donor, DonorDraft, Gender, InventoryItem, SearchCriteria};
use bloodbank_infra::Generation;

#[derive(Default)]
pub struct Calls {
    pub list_donors: AtomicUsize,
    pub list_inventory: AtomicUsize,
    pub create: AtomicUsize,
    pub search: AtomicUsize,
    pub generate: AtomicUsize,
    pub last_search: Mutex<Option<SearchCriteria>>,
    pub last_prompt: Mutex<Option<String>>,
}

impl Calls {
    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Default)]
pub struct DummyBackend {
    pub calls: Arc<Calls>,
    pub donors: Vec<Donor>,
    pub inventory: Vec<InventoryItem>,
    pub search_results: Vec<Donor>,
    pub donors_down: Arc<AtomicBool>,
    pub inventory_down: Arc<AtomicBool>,
    pub create_down: Arc<AtomicBool>,
    pub search_down: Arc<AtomicBool>,
}

#[async_trait]
impl DonorBackend for DummyBackend {
    async fn list_donors(&self) -> anyhow::Result<Vec<Donor>> {
        self.calls.list_donors.fetch_add(1, Ordering::SeqCst);
        if self.donors_down.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }
        Ok(self.donors.clone())
    }

    async fn list_inventory(&self) -> anyhow::Result<Vec<InventoryItem>> {
        self.calls.list_inventory.fetch_add(1, Ordering::SeqCst);
        if self.inventory_down.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }
        Ok(self.inventory.clone())
    }

    async fn create_donor(&self, _draft: &DonorDraft) -> anyhow::Result<()> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        if self.create_down.load(Ordering::SeqCst) {
            anyhow::bail!("500 Internal Server Error");
        }
        Ok(())
    }

    async fn search_donors(&self, criteria: &SearchCriteria) -> anyhow::Result<Vec<Donor>> {
        self.calls.search.fetch_add(1, Ordering::SeqCst);
        *self.calls.last_search.lock().unwrap() = Some(criteria.clone());
        if self.search_down.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }
        Ok(self.search_results.clone())
    }
}

pub enum Reply {
    Text(&'static str),
    Empty,
    Fail,
}

pub struct DummyGenerator {
    pub calls: Arc<Calls>,
    pub reply: Reply,
}

#[async_trait]
impl TextGenerator for DummyGenerator {
    async fn generate(&self, prompt: &str) -> anyhow::Result<Generation> {
        self.calls.generate.fetch_add(1, Ordering::SeqCst);
        *self.calls.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match self.reply {
            Reply::Text(t) => Ok(Generation::Text(t.to_string())),
            Reply::Empty => Ok(Generation::Empty),
            Reply::Fail => anyhow::bail!("403 Forbidden"),
        }
    }
}

pub fn donor(first: &str, bt: BloodType) -> Donor {
    Donor {
        id: Some(7),
        first_name: first.into(),
        last_name: "Doe".into(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "555-0100".into(),
        blood_type: bt,
        date_of_birth: "1990-05-01".into(),
        gender: Some(Gender::Female),
        city: "Los Angeles".into(),
        state: "CA".into(),
        is_eligible: true,
        registration_date: Some("2024-01-01".into()),
    }
}

pub type TestKernel = AppKernel<DummyBackend, DummyGenerator>;

pub fn kernel(backend: DummyBackend, reply: Reply) -> TestKernel {
    let generator = DummyGenerator {
        calls: backend.calls.clone(),
        reply,
    };
    AppKernel::new(AppStore::new(AppState::default()), backend, generator)
        .expect("kernel")
        .with_notification_delay(Duration::from_millis(200))
}

/// Ticks until `done` holds or a couple of seconds pass.
pub async fn settle(kernel: &mut TestKernel, done: impl Fn(&AppState) -> bool) -> AppState {
    for _ in 0..400 {
        kernel.tick();
        let state = kernel.state();
        if done(&state) {
            return state;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("state never settled: {:?}", kernel.state());
}

/// Ticks for a short while so that anything still in flight lands.
pub async fn drain(kernel: &mut TestKernel) -> AppState {
    for _ in 0..10 {
        kernel.tick();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    kernel.tick();
    kernel.state()
}
