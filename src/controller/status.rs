use log::warn;

use crate::api::PlacesApi;

/// One-shot liveness probe, run once per page render. Only an exact
/// `{"status": "OK"}` counts as available; any other payload or a
/// transport failure does not. The failure is silent toward the user
/// (the badge is decorative) but logged.
pub fn probe_status(api: &dyn PlacesApi) -> bool {
    match api.status() {
        Ok(status) => status.is_ok(),
        Err(e) => {
            warn!("API status probe failed: {e}");
            false
        }
    }
}
