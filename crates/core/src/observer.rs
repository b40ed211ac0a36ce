/// Receives one event per solver iteration.
///
/// Returning `Some(action)` asks the solver to act (each solver defines its
/// own action type); `None` lets the iteration run on. Any
/// `FnMut(&E) -> Option<A>` closure is an observer, and `()` ignores
/// everything.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<Obs: Observer<usize, &'static str>>(mut observer: Obs, events: usize) -> Vec<&'static str> {
        (0..events).filter_map(|e| observer.observe(&e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), 5).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |event: &usize| {
                seen.push(*event);
                (*event == 3).then_some("stop")
            },
            5,
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }
}
