use std::sync::Arc;
use std::time::Duration;

use bloodbank_core::{campaign_prompt, distinct_blood_types, low_stock_items, outreach_prompt};
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::app_core::{AppCommand, AppStore, DomainEvent};
use crate::domain::{
    GeneratedText, Notification, View, MSG_COPIED, MSG_CRITERIA_REQUIRED, MSG_REGISTERED,
    MSG_REGISTER_FAILED, MSG_SEARCH_FAILED,
};
use crate::ports::{DonorBackend, TextGenerator};

pub struct AppKernel<B, G> {
    pub store: AppStore,
    backend: Arc<B>,
    generator: Arc<G>,
    runtime: Handle,
    notify_after: Duration,

    tx: mpsc::Sender<DomainEvent>,
    rx: mpsc::Receiver<DomainEvent>,
}

impl<B, G> AppKernel<B, G>
where
    B: DonorBackend,
    G: TextGenerator,
{
    /// Uses the ambient tokio runtime if there is one, otherwise a shared
    /// background runtime.
    pub fn new(store: AppStore, backend: B, generator: G) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel(bloodbank_config::EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            store,
            backend: Arc::new(backend),
            generator: Arc::new(generator),
            runtime: crate::async_runtime::handle()?,
            notify_after: bloodbank_config::NOTIFICATION_DISMISS_AFTER,
            tx,
            rx,
        })
    }

    pub fn with_notification_delay(mut self, delay: Duration) -> Self {
        self.notify_after = delay;
        self
    }

    fn worker(&self) -> Worker<B> {
        Worker {
            tx: self.tx.clone(),
            backend: self.backend.clone(),
            notify_after: self.notify_after,
        }
    }

    pub fn dispatch(&mut self, cmd: AppCommand) {
        match cmd {
            AppCommand::LoadInitialState => {
                let worker = self.worker();
                self.runtime.spawn(async move {
                    tokio::join!(worker.fetch_donors(), worker.fetch_inventory());
                });
            }

            AppCommand::Retry => {
                if self.store.read(|s| s.retrying) {
                    return;
                }
                self.store.apply(DomainEvent::RetryStarted);
                let worker = self.worker();
                self.runtime.spawn(async move {
                    tokio::join!(worker.fetch_donors(), worker.fetch_inventory());
                    worker.emit(DomainEvent::RetryFinished).await;
                });
            }

            AppCommand::Navigate(v) => self.store.apply(DomainEvent::ViewChanged(v)),

            AppCommand::EditDraft(edit) => self.store.apply(DomainEvent::DraftEdited(edit)),

            AppCommand::SubmitRegistration => {
                let (draft, busy) = self.store.read(|s| (s.draft.clone(), s.registering));
                if busy {
                    return;
                }
                if let Err(e) = draft.validate() {
                    tracing::warn!("Registration rejected: {e:?}");
                    self.notify(Notification::error(e.to_string()));
                    return;
                }

                self.store.apply(DomainEvent::RegistrationStarted);
                let worker = self.worker();
                self.runtime.spawn(async move {
                    match worker.backend.create_donor(&draft).await {
                        Ok(()) => {
                            tracing::info!("Donor registered");
                            worker.emit(DomainEvent::RegistrationSucceeded).await;
                            worker.notify(Notification::success(MSG_REGISTERED)).await;
                            worker.fetch_donors().await;
                            worker.emit(DomainEvent::ViewChanged(View::Donors)).await;
                        }
                        Err(e) => {
                            tracing::error!("Error registering donor: {e:#}");
                            worker.emit(DomainEvent::RegistrationFailed).await;
                            worker.notify(Notification::error(MSG_REGISTER_FAILED)).await;
                        }
                    }
                });
            }

            AppCommand::SetSearchTerm(term) => self.store.apply(DomainEvent::SearchTermChanged(term)),

            AppCommand::EditCriteria(edit) => self.store.apply(DomainEvent::CriteriaEdited(edit)),

            AppCommand::SearchDonors => {
                let (criteria, phase) = self
                    .store
                    .read(|s| (s.finder.criteria.clone(), s.finder.phase));
                if phase == crate::domain::FinderPhase::Searching {
                    return;
                }
                if !criteria.is_complete() {
                    tracing::warn!("Search rejected: state and city are both required");
                    self.notify(Notification::error(MSG_CRITERIA_REQUIRED));
                    return;
                }

                tracing::info!("Searching donors in {}", criteria.location_label());
                self.store.apply(DomainEvent::SearchStarted);
                let worker = self.worker();
                self.runtime.spawn(async move {
                    match worker.backend.search_donors(&criteria).await {
                        Ok(donors) => {
                            tracing::debug!("Search returned {} donors", donors.len());
                            worker.emit(DomainEvent::SearchCompleted(donors)).await;
                        }
                        Err(e) => {
                            tracing::error!("Error finding donors: {e:#}");
                            worker.emit(DomainEvent::SearchFailed).await;
                            worker.notify(Notification::error(MSG_SEARCH_FAILED)).await;
                        }
                    }
                });
            }

            AppCommand::GenerateOutreachMessage => {
                let prompt = self.store.read(|s| {
                    let finder = &s.finder;
                    if !finder.can_generate_outreach() {
                        return None;
                    }
                    let location = finder.searched.as_ref().unwrap_or(&finder.criteria);
                    Some(outreach_prompt(location, &distinct_blood_types(&finder.results)))
                });
                let Some(prompt) = prompt else {
                    return;
                };

                tracing::info!("Generating outreach message");
                self.store.apply(DomainEvent::OutreachGenerationStarted);
                let tx = self.tx.clone();
                let generator = self.generator.clone();
                self.runtime.spawn(async move {
                    let text = GeneratedText::from_outcome(generator.generate(&prompt).await);
                    let _ = tx.send(DomainEvent::OutreachGenerated(text)).await;
                });
            }

            AppCommand::OutreachCopied => self.notify(Notification::success(MSG_COPIED)),

            AppCommand::GenerateCampaignIdeas => {
                let (low, busy) = self
                    .store
                    .read(|s| (low_stock_items(&s.inventory), s.campaign.generating));
                if busy {
                    return;
                }
                tracing::info!("Generating campaign ideas for {} low-stock types", low.len());
                let prompt = campaign_prompt(&low);

                self.store.apply(DomainEvent::CampaignGenerationStarted);
                let tx = self.tx.clone();
                let generator = self.generator.clone();
                self.runtime.spawn(async move {
                    let text = GeneratedText::from_outcome(generator.generate(&prompt).await);
                    let _ = tx.send(DomainEvent::CampaignGenerated(text)).await;
                });
            }

            AppCommand::DismissNotification => self.store.apply(DomainEvent::NotificationCleared),
        }
    }

    fn notify(&self, n: Notification) {
        self.store.apply(DomainEvent::NotificationShown(n));
        self.runtime.spawn(clear_after(self.tx.clone(), self.notify_after));
    }

    /// Applies everything the background tasks have reported since the last call.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.store.apply(ev);
        }
    }

    pub fn state(&self) -> crate::domain::AppState {
        self.store.state()
    }
}

async fn clear_after(tx: mpsc::Sender<DomainEvent>, delay: Duration) {
    tokio::time::sleep(delay).await;
    let _ = tx.send(DomainEvent::NotificationCleared).await;
}

/// What a spawned task needs to talk back to the kernel.
struct Worker<B> {
    tx: mpsc::Sender<DomainEvent>,
    backend: Arc<B>,
    notify_after: Duration,
}

impl<B: DonorBackend> Worker<B> {
    async fn emit(&self, ev: DomainEvent) {
        // The receiver only goes away with the kernel.
        let _ = self.tx.send(ev).await;
    }

    async fn notify(&self, n: Notification) {
        self.emit(DomainEvent::NotificationShown(n)).await;
        tokio::spawn(clear_after(self.tx.clone(), self.notify_after));
    }

    async fn fetch_donors(&self) {
        match self.backend.list_donors().await {
            Ok(donors) => self.emit(DomainEvent::DonorsLoaded(donors)).await,
            Err(e) => {
                tracing::error!("Error fetching donors: {e:#}");
                self.emit(DomainEvent::DonorsLoadFailed).await;
            }
        }
    }

    // Failures here are logged only; the banner is raised by the donor list.
    async fn fetch_inventory(&self) {
        match self.backend.list_inventory().await {
            Ok(items) => self.emit(DomainEvent::InventoryLoaded(items)).await,
            Err(e) => tracing::error!("Error fetching inventory: {e:#}"),
        }
    }
}
