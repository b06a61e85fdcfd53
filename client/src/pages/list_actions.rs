//! Fetch and mutate helpers shared by the record list pages.
//!
//! Every helper spawns its request on hydrate and is a no-op during SSR.
//! Failures are logged and land in the list's error banner.

#[cfg(test)]
#[path = "list_actions_test.rs"]
mod list_actions_test;

use leptos::prelude::*;
use records::rest::Resource;
use records::vehicle::Vehicle;
use records::{ApiRequest, RecordId};

use crate::components::form_field::Choices;
use crate::net::api::ApiError;
use crate::state::list::ListState;

/// Replace `list` with a fresh `GET` of its collection.
pub fn load<T>(list: RwSignal<ListState<T>>, context: &'static str)
where
    T: Resource + Clone + Send + Sync + 'static,
{
    list.update(ListState::begin_fetch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_all::<T>().await;
        list.update(|l| l.apply_fetch(context, result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = context;
    }
}

/// Fill a lookup collection (e.g. vehicles for a select). A failure leaves
/// it empty.
pub fn load_into<T>(target: RwSignal<Vec<T>>, context: &'static str)
where
    T: Resource + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_all::<T>().await {
            Ok(items) => target.set(items),
            Err(e) => {
                crate::net::api::report(context, &e);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, context);
    }
}

/// `DELETE` one record and drop it from the list.
pub fn delete<T>(list: RwSignal<ListState<T>>, id: RecordId, context: &'static str)
where
    T: Resource + Clone + Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::execute(records::rest::delete::<T>(id)).await {
            Ok(()) => list.update(|l| l.remove(id)),
            Err(e) => {
                let banner = crate::net::api::report(context, &e);
                list.update(|l| l.error = Some(banner));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, id, context);
    }
}

/// Send a state-changing request, then hand control to `reload` so the page
/// can refetch.
pub fn run_then_reload<T>(
    list: RwSignal<ListState<T>>,
    request: ApiRequest,
    context: &'static str,
    reload: Callback<()>,
) where
    T: Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::execute(request).await {
            Ok(()) => reload.run(()),
            Err(e) => {
                let banner = crate::net::api::report(context, &e);
                list.update(|l| l.error = Some(banner));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (list, request, context, reload);
    }
}

/// Unwrap one of several concurrent fetches. A failure is logged and
/// contributes an empty collection.
pub fn or_empty<T>(context: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        crate::net::api::report(context, &e);
        Vec::new()
    })
}

/// Choices for a vehicle select, labelled `BUS-001 (AAA 111)`.
pub fn vehicle_choices(vehicles: &[Vehicle]) -> Choices {
    vehicles.iter().map(|v| (v.id.to_string(), v.label())).collect()
}

/// Display label for a vehicle id, falling back to `#<id>`.
pub fn vehicle_label(vehicles: &[Vehicle], id: RecordId) -> String {
    vehicles.iter().find(|v| v.id == id).map_or_else(|| format!("#{id}"), Vehicle::label)
}
