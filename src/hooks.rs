use yew::prelude::*;

use crate::config;
use crate::data;
use crate::models::catalog::CatalogKind;
use crate::rotator::{RotatorAction, RotatorState};
use crate::timer::{needs_rotation, ScopedInterval};

/// Rotator over the `kind` table, advanced every
/// `config::ROTATION_INTERVAL_MS` while the calling component is mounted.
#[hook]
pub fn use_featured_rotator(kind: CatalogKind) -> UseReducerHandle<RotatorState> {
    let rotator = use_reducer(move || RotatorState::new(data::catalog_or_empty(kind)));

    {
        let dispatcher = rotator.dispatcher();
        use_effect_with_deps(
            move |kind| {
                let mut interval = if needs_rotation(data::catalog_or_empty(*kind).len()) {
                    ScopedInterval::start(config::ROTATION_INTERVAL_MS, move || {
                        dispatcher.dispatch(RotatorAction::Tick);
                    })
                } else {
                    ScopedInterval::idle()
                };
                log::debug!("{} rotation active: {}", kind.title(), interval.is_active());

                move || interval.cancel()
            },
            kind,
        );
    }

    rotator
}
