// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The import workflow of a single profile.
//!
//! Requests are driven sequentially by the caller. Only the
//! dashboard reload issues multiple requests concurrently.

use klug_core::{
    FileFormat, HistoryQuery, ImportBatchId, ImportBatchSummary, ImportCursor, ImportSettings,
    MediaType, ShowDetail,
    import::validate::{Accepted, ImportFile, Rejection, validate_import_input},
};
use uuid::Uuid;

use crate::{
    config::ClientConfig,
    models::{
        Models, batch_history,
        batch_history::LookupError,
        dashboard,
        import::{self, ImportUpload, SubmissionFailure},
        import_errors,
        session::{self, SessionState},
    },
    prefs::{self, PreferenceStore},
    webapi::WebApi,
};

#[derive(Debug)]
pub struct Workflow<A, S> {
    api: A,
    store: S,
    config: ClientConfig,
    settings: ImportSettings,
    last_cursor: Option<ImportCursor>,
    models: Models,
}

impl<A, S> Workflow<A, S>
where
    A: WebApi,
    S: PreferenceStore,
{
    /// Restore the settings and the last cursor of the profile.
    #[must_use]
    pub fn new(api: A, store: S, config: ClientConfig) -> Self {
        let settings = prefs::restore_settings(&store);
        let last_cursor = prefs::restore_last_cursor(&store);
        log::debug!("Restored import settings: {settings:?}");
        let models = Models {
            dashboard: dashboard::Model::with_history_page_size(config.history_page_size),
            ..Default::default()
        };
        Self {
            api,
            store,
            config,
            settings,
            last_cursor,
            models,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub const fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Edit the settings of the next import.
    ///
    /// The settings are persisted when submitting.
    pub fn update_settings(&mut self, settings: ImportSettings) {
        self.settings = settings;
    }

    /// The cursor of the last successful import.
    #[must_use]
    pub const fn last_cursor(&self) -> Option<&ImportCursor> {
        self.last_cursor.as_ref()
    }

    #[must_use]
    pub const fn models(&self) -> &Models {
        &self.models
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    pub fn validate(&self, file: Option<&ImportFile>) -> Result<Accepted, Rejection> {
        validate_import_input(file, &self.settings, self.config.max_upload_bytes)
    }

    fn persist_settings(&mut self) {
        if let Err(err) = prefs::save_settings(&mut self.store, &self.settings) {
            log::warn!("Failed to save import settings: {err}");
        }
    }

    fn persist_last_cursor(&mut self, cursor: ImportCursor) {
        if let Err(err) = prefs::save_last_cursor(&mut self.store, &cursor) {
            log::warn!("Failed to save last cursor: {err}");
        }
        self.last_cursor = Some(cursor);
    }

    /// Upload a file that has passed validation.
    ///
    /// Rejected as [`SubmissionFailure::Busy`] while another
    /// submission is pending.
    pub async fn submit(
        &mut self,
        format: FileFormat,
        upload: ImportUpload,
    ) -> Result<ImportBatchSummary, SubmissionFailure> {
        let token = self.models.import.start_submit()?;
        self.models.import_errors.clear();
        self.persist_settings();
        let result = import::task::upload(&self.api, format, &self.settings, upload).await;
        self.models.import.finish_submit(token, &result);
        match &result {
            Ok(summary) => {
                if let Some(cursor_after) = &summary.cursor_after {
                    self.persist_last_cursor(cursor_after.clone());
                }
                if let Some(import_batch_id) = summary.batch_with_errors() {
                    self.fetch_errors(import_batch_id, self.config.error_page_size)
                        .await;
                } else if summary.error_count == 0 {
                    self.models
                        .import_errors
                        .show_no_errors(summary.import_batch_id);
                } else {
                    // Errors of dry runs are not recorded in a batch
                    self.models.import_errors.clear();
                }
                self.reload_dashboard().await;
            }
            Err(SubmissionFailure::Transport(_)) => {
                self.models.import_errors.clear();
            }
            Err(SubmissionFailure::Busy | SubmissionFailure::Rejected { .. }) => (),
        }
        result
    }

    /// Fetch and display the row errors of a batch.
    pub async fn fetch_errors(&mut self, import_batch_id: ImportBatchId, limit: u32) {
        let token = self.models.import_errors.start_fetch(import_batch_id);
        let result =
            import_errors::task::fetch_import_batch_errors(&self.api, &import_batch_id, limit)
                .await;
        self.models
            .import_errors
            .finish_fetch(token, import_batch_id, result);
    }

    pub async fn refresh_batch_history(&mut self) {
        let token = self.models.batch_history.start_refresh();
        let result = batch_history::task::fetch_import_batches(
            &self.api,
            self.config.batch_history_page_size,
        )
        .await;
        self.models.batch_history.finish_refresh(token, result);
    }

    /// Display the row errors of a batch from the history.
    pub async fn view_errors(
        &mut self,
        import_batch_id: ImportBatchId,
    ) -> Result<(), LookupError> {
        self.models.batch_history.find(&import_batch_id)?;
        self.fetch_errors(import_batch_id, self.config.error_page_size)
            .await;
        Ok(())
    }

    /// Apply and persist the recorded settings of a batch from the history.
    pub fn reuse_settings(
        &mut self,
        import_batch_id: ImportBatchId,
    ) -> Result<&ImportSettings, LookupError> {
        let patch = self
            .models
            .batch_history
            .find(&import_batch_id)?
            .settings_patch();
        if self.settings.apply_patch(patch) {
            log::info!("Reusing settings of batch {import_batch_id}");
        }
        self.persist_settings();
        Ok(&self.settings)
    }

    /// Paging continues with the limit of the most recent query.
    fn current_history_query(&self) -> HistoryQuery {
        *self.models.dashboard.history_query()
    }

    /// Reload all parts of the dashboard concurrently.
    ///
    /// Each part is updated independently of the others.
    pub async fn reload_dashboard(&mut self) {
        let history_query = self.current_history_query();
        let shows_token = self.models.dashboard.shows.start_pending_now();
        let progress_token = self.models.dashboard.progress.start_pending_now();
        let history_token = self.models.dashboard.start_history(history_query);
        let batches_token = self.models.batch_history.start_refresh();
        let (shows, progress, history, batches) = tokio::join!(
            dashboard::task::fetch_shows(&self.api),
            dashboard::task::fetch_show_progress(&self.api),
            dashboard::task::fetch_watch_events(&self.api, &history_query),
            batch_history::task::fetch_import_batches(
                &self.api,
                self.config.batch_history_page_size
            ),
        );
        let dashboard = &mut self.models.dashboard;
        dashboard.shows.finish_pending(shows_token, shows);
        dashboard.progress.finish_pending(progress_token, progress);
        dashboard.history.finish_pending(history_token, history);
        self.models
            .batch_history
            .finish_refresh(batches_token, batches);
    }

    pub async fn load_history(&mut self, query: HistoryQuery) {
        let token = self.models.dashboard.start_history(query);
        let result = dashboard::task::fetch_watch_events(&self.api, &query).await;
        self.models.dashboard.history.finish_pending(token, result);
    }

    /// Returns `false` if there is no next page.
    pub async fn next_history_page(&mut self) -> bool {
        if !self.models.dashboard.has_next_history_page() {
            return false;
        }
        let query = self.current_history_query().next_page();
        self.load_history(query).await;
        true
    }

    /// Returns `false` if there is no previous page.
    pub async fn previous_history_page(&mut self) -> bool {
        let query = self.current_history_query();
        if !query.has_previous_page() {
            return false;
        }
        self.load_history(query.previous_page()).await;
        true
    }

    pub async fn filter_history(&mut self, media_type: Option<MediaType>) {
        let query = self.current_history_query().with_media_type(media_type);
        self.load_history(query).await;
    }

    /// Load the episodes and the watch progress of a single show.
    pub async fn load_show_detail(&mut self, show_id: &Uuid) -> Option<&ShowDetail> {
        let token = self.models.dashboard.show_detail.start_pending_now();
        let result = dashboard::task::fetch_show_detail(&self.api, show_id).await;
        self.models.dashboard.show_detail.finish_pending(token, result);
        self.models.dashboard.show_detail.detail()
    }

    pub async fn check_session(&mut self) -> &SessionState {
        let token = self.models.session.start_check();
        let result = session::task::fetch_session_status(&self.api).await;
        self.models.session.finish_check(token, result);
        self.models.session.state()
    }

    /// Check the session and reload the dashboard if authenticated.
    pub async fn start_session(&mut self) -> bool {
        let authenticated = self.check_session().await.is_authenticated();
        if authenticated {
            self.reload_dashboard().await;
        }
        authenticated
    }

    /// Returns `true` if the session is authenticated afterwards.
    pub async fn login(&mut self, password: &str) -> bool {
        if let Err(err) = session::task::login(&self.api, password).await {
            log::warn!("Login failed: {err:#}");
            self.models.session.login_failed();
            return false;
        }
        self.models.session.login_succeeded();
        self.start_session().await
    }

    pub async fn logout(&mut self) -> &SessionState {
        if let Err(err) = session::task::logout(&self.api).await {
            log::warn!("Logout failed: {err:#}");
        }
        self.check_session().await
    }
}
