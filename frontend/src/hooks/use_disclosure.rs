use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::{Disclosure, DisclosureTiming, TransactionRecord};
use yew::prelude::*;

pub enum DisclosureAction {
    Open(TransactionRecord),
    Close,
    Elapsed(u64),
}

#[derive(Clone, PartialEq)]
pub struct DisclosureStore(pub Disclosure<TransactionRecord>);

impl Reducible for DisclosureStore {
    type Action = DisclosureAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            DisclosureAction::Open(record) => {
                next.0.open(record);
                true
            }
            DisclosureAction::Close => next.0.close().is_some(),
            DisclosureAction::Elapsed(token) => next.0.elapse(token),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub struct UseDisclosureResult {
    pub disclosure: Disclosure<TransactionRecord>,
    pub open: Callback<TransactionRecord>,
    pub close: Callback<()>,
}

/// Transaction detail modal state with its reveal/fade-out timers.
///
/// At most one timer exists: it is dropped (and thereby cancelled) as soon as
/// the pending transition changes.
#[hook]
pub fn use_disclosure(timing: DisclosureTiming) -> UseDisclosureResult {
    let store = use_reducer(move || DisclosureStore(Disclosure::new(timing)));

    {
        let dispatcher = store.dispatcher();
        use_effect_with(store.0.pending(), move |pending| {
            let timeout = pending.map(|pending| {
                Timeout::new(pending.delay_ms, move || {
                    dispatcher.dispatch(DisclosureAction::Elapsed(pending.token));
                })
            });
            move || drop(timeout)
        });
    }

    let open = {
        let dispatcher = store.dispatcher();
        Callback::from(move |record: TransactionRecord| dispatcher.dispatch(DisclosureAction::Open(record)))
    };

    let close = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DisclosureAction::Close))
    };

    UseDisclosureResult {
        disclosure: store.0.clone(),
        open,
        close,
    }
}
