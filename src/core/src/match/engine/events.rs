use crate::r#match::ball::events::{BallEvent, BallEventDispatcher};
use crate::r#match::{MatchContext, MatchField};

/// Events produced during a tick and applied after all integrators ran.
#[derive(Copy, Clone, Debug)]
pub enum Event {
    Ball(BallEvent),
}

#[derive(Default)]
pub struct EventCollection {
    pub events: Vec<Event>,
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection { events: Vec::new() }
    }

    pub fn add_ball_event(&mut self, event: BallEvent) {
        self.events.push(Event::Ball(event));
    }
}

pub struct EventDispatcher;

impl EventDispatcher {
    pub fn dispatch(events: EventCollection, field: &mut MatchField, context: &mut MatchContext) {
        for event in events.events {
            match event {
                Event::Ball(ball_event) => {
                    BallEventDispatcher::dispatch(ball_event, field, context)
                }
            }
        }
    }
}
