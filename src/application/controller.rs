use crate::application::fetcher::DataFetcher;
use crate::application::loader::LoaderState;
use crate::application::state::{AppState, RequestToken};
use crate::config::DisplayEnvConfig;
use crate::domain::errors::FetchError;
use crate::domain::prediction::{FrequencyPayload, PredictionPayload, StatsPayload};
use crate::interfaces::view_models::chart::render_frequency_chart;
use crate::interfaces::view_models::renderer::{
    render_dashboard, render_prediction_sets, render_stats,
};
use crate::interfaces::view_models::screen::{MountPoint, Screen};
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::{debug, error, info, warn};

pub const LOAD_FAILED_ALERT: &str = "분석 데이터를 불러오는 중 오류가 발생했습니다.";

/// Which prediction document a request asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionRequest {
    Latest,
    Round(NonZeroU32),
}

impl PredictionRequest {
    fn round(&self) -> Option<NonZeroU32> {
        match self {
            PredictionRequest::Latest => None,
            PredictionRequest::Round(round) => Some(*round),
        }
    }

    /// Message shown when this request fails.
    pub fn failure_alert(&self, error: &FetchError) -> String {
        match (self, error) {
            (PredictionRequest::Round(round), FetchError::NotFound { .. }) => {
                format!("제 {}회 예측 데이터를 찾을 수 없습니다.", round)
            }
            (PredictionRequest::Round(round), _) => {
                format!("제 {}회 예측 데이터를 불러오는 중 오류가 발생했습니다.", round)
            }
            (PredictionRequest::Latest, _) => LOAD_FAILED_ALERT.to_string(),
        }
    }
}

/// Completed background work, delivered to the UI thread.
#[derive(Debug)]
pub enum DashboardEvent {
    Prediction {
        token: RequestToken,
        request: PredictionRequest,
        result: Result<PredictionPayload, FetchError>,
    },
    Stats(Result<StatsPayload, FetchError>),
    Frequencies(Result<FrequencyPayload, FetchError>),
}

/// Owns the dashboard session: state, screen and loader.
///
/// Fetches run on the tokio runtime behind `handle`; their results are applied
/// by [`poll`](Self::poll) on the caller's thread, one event at a time, so
/// state is never touched while a request is in flight.
pub struct DashboardController {
    fetcher: Arc<DataFetcher>,
    handle: Handle,
    tx: Sender<DashboardEvent>,
    rx: Receiver<DashboardEvent>,
    state: AppState,
    screen: Screen,
    loader: LoaderState,
    reveal_delay: Duration,
    set_count: usize,
    round_input: String,
    alerts: VecDeque<String>,
}

impl DashboardController {
    pub fn new(fetcher: Arc<DataFetcher>, handle: Handle, display: &DisplayEnvConfig) -> Self {
        let (tx, rx) = unbounded();
        Self {
            fetcher,
            handle,
            tx,
            rx,
            state: AppState::new(),
            screen: Screen::without(&display.hidden_panels),
            loader: LoaderState::new(display.loader_min_display),
            reveal_delay: display.reveal_delay,
            set_count: display.default_set_count,
            round_input: String::new(),
            alerts: VecDeque::new(),
        }
    }

    /// Initial load: the latest prediction (held back until the reveal delay
    /// has elapsed) and, concurrently, stats followed by frequencies.
    pub fn start(&mut self) {
        info!("Starting dashboard load");
        self.request_prediction(PredictionRequest::Latest, self.reveal_delay);

        let fetcher = self.fetcher.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let stats = fetcher.fetch_stats().await;
            if tx.send(DashboardEvent::Stats(stats)).is_err() {
                return;
            }
            let frequencies = fetcher.fetch_frequencies().await;
            let _ = tx.send(DashboardEvent::Frequencies(frequencies));
        });
    }

    /// Redraws the prediction cards from the cached payload. No request is made.
    pub fn on_set_count_change(&mut self, count: usize) {
        self.set_count = count;
        if let Some(payload) = self.state.prediction() {
            render_prediction_sets(&mut self.screen, payload, count);
        }
    }

    /// Looks up a historical round. Anything but a positive integer is ignored.
    pub fn on_search_round(&mut self, input: &str) {
        match input.trim().parse::<NonZeroU32>() {
            Ok(round) => {
                info!("Searching round {}", round);
                self.request_prediction(PredictionRequest::Round(round), Duration::ZERO);
            }
            Err(_) => debug!("Ignoring round input {:?}", input),
        }
    }

    pub fn on_reset_to_latest(&mut self) {
        info!("Resetting to latest round");
        self.request_prediction(PredictionRequest::Latest, Duration::ZERO);
    }

    /// Applies every completed event. Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
            changed = true;
        }
        changed
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Prediction {
                token,
                request,
                result,
            } => self.apply_prediction(token, request, result),
            DashboardEvent::Stats(Ok(stats)) => render_stats(&mut self.screen, &stats),
            DashboardEvent::Stats(Err(e)) => warn!("Stats unavailable: {}", e),
            DashboardEvent::Frequencies(Ok(frequencies)) => {
                render_frequency_chart(&mut self.screen, &frequencies)
            }
            DashboardEvent::Frequencies(Err(e)) => warn!("Frequencies unavailable: {}", e),
        }
    }

    fn apply_prediction(
        &mut self,
        token: RequestToken,
        request: PredictionRequest,
        result: Result<PredictionPayload, FetchError>,
    ) {
        if !self.state.is_current(token) {
            debug!("Discarding stale response #{} for {:?}", token.value(), request);
            return;
        }

        match result {
            Ok(payload) => {
                self.state.set_prediction(payload);
                self.state
                    .set_historical(matches!(request, PredictionRequest::Round(_)));
                if request == PredictionRequest::Latest {
                    self.round_input.clear();
                }
                render_dashboard(&mut self.screen, &self.state, self.set_count);
            }
            Err(e) => {
                error!("Prediction request {:?} failed: {}", request, e);
                self.alerts.push_back(request.failure_alert(&e));
            }
        }
        self.loader.finish(Instant::now());
    }

    fn request_prediction(&mut self, request: PredictionRequest, floor: Duration) {
        let token = self.state.issue_token();
        self.loader.show(Instant::now());

        let fetcher = self.fetcher.clone();
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            let issued = tokio::time::Instant::now();
            let result = fetcher.fetch_prediction(request.round()).await;
            tokio::time::sleep_until(issued + floor).await;
            let _ = tx.send(DashboardEvent::Prediction {
                token,
                request,
                result,
            });
        });
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_loader_visible(&self) -> bool {
        self.screen.is_mounted(MountPoint::Loader)
            && self.loader.is_visible(Instant::now())
    }

    /// Time until the loader should be reconsidered, for repaint scheduling.
    pub fn loader_remaining(&self) -> Option<Duration> {
        self.loader.remaining(Instant::now())
    }

    /// A prediction request is still outstanding.
    pub fn is_busy(&self) -> bool {
        self.loader.is_pending()
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alerts.pop_front()
    }

    pub fn set_count(&self) -> usize {
        self.set_count
    }

    pub fn round_input(&self) -> &str {
        &self.round_input
    }

    pub fn round_input_mut(&mut self) -> &mut String {
        &mut self.round_input
    }
}
