use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::hooks::{use_first_sight, SightOptions};
use crate::state::counter::CounterState;

enum CounterAction {
    Tick,
    Retarget(u32, u32),
}

#[derive(PartialEq)]
struct Counting(CounterState);

impl Reducible for Counting {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            CounterAction::Tick => {
                let mut next = self.0;
                if next.tick() && !self.0.is_done() {
                    debug!("Counter reached {}", next.target);
                }
                next
            }
            CounterAction::Retarget(target, divisions) => self.0.retarget(target, divisions),
        };
        if next == self.0 {
            self
        } else {
            Rc::new(Counting(next))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
    pub label: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let config = config::site();
    let node = use_node_ref();
    let seen = use_first_sight(
        node.clone(),
        SightOptions {
            threshold: config.counter_threshold,
            root_margin: "0px".to_string(),
        },
    );

    let target = props.target;
    let divisions = config.counter_divisions;
    let counting = use_reducer_eq(|| Counting(CounterState::new(target, divisions)));

    {
        let dispatcher = counting.dispatcher();
        use_effect_with_deps(
            move |target: &u32| {
                dispatcher.dispatch(CounterAction::Retarget(*target, divisions));
                || ()
            },
            target,
        );
    }

    {
        let dispatcher = counting.dispatcher();
        let running = seen && !counting.0.is_done();
        use_interval(
            move || dispatcher.dispatch(CounterAction::Tick),
            if running { config.counter_tick_ms } else { 0 },
        );
    }

    html! {
        <div class="stat" ref={node}>
            <span class="counter" data-target={target.to_string()}>
                { counting.0.label(&props.suffix) }
            </span>
            <p class="stat-label">{ &props.label }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(counting: Rc<Counting>, action: CounterAction) -> Rc<Counting> {
        counting.reduce(action)
    }

    #[test]
    fn ticks_build_on_the_latest_value() {
        let mut counting = Rc::new(Counting(CounterState::new(250, 100)));
        for _ in 0..3 {
            counting = dispatch(counting, CounterAction::Tick);
        }
        assert_eq!(counting.0.current, 6);
    }

    #[test]
    fn finished_counter_keeps_the_same_state() {
        let mut finished = CounterState::new(3, 100);
        while !finished.tick() {}
        let counting = Rc::new(Counting(finished));
        let after = dispatch(counting.clone(), CounterAction::Tick);
        assert!(Rc::ptr_eq(&counting, &after));
    }

    #[test]
    fn new_target_restarts_the_count() {
        let counting = dispatch(
            Rc::new(Counting(CounterState::new(250, 100))),
            CounterAction::Tick,
        );
        let same = dispatch(counting.clone(), CounterAction::Retarget(250, 100));
        assert!(Rc::ptr_eq(&counting, &same));

        let moved = dispatch(counting, CounterAction::Retarget(40, 100));
        assert_eq!(moved.0, CounterState::new(40, 100));
    }
}
