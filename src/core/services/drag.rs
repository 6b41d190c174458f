//! Pointer drag recognition for task cards.
//!
//! A press arms the gesture; it only becomes a drag once the pointer has
//! travelled the activation distance, so plain clicks never move a task.

pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Pressed {
        task_id: String,
        origin: Point,
        grab: Point,
    },
    Dragging {
        task_id: String,
        pointer: Point,
        grab: Point,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragStart {
    pub active_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub active_id: String,
    pub over_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    state: DragState,
    activation_distance: f64,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragGesture {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            state: DragState::Idle,
            activation_distance: activation_distance.max(0.0),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the task being dragged, if the gesture passed the threshold.
    pub fn active_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { task_id, .. } => Some(task_id),
            _ => None,
        }
    }

    /// Top-left corner for an overlay that keeps the card under the grab point.
    pub fn overlay_position(&self) -> Option<Point> {
        match &self.state {
            DragState::Dragging { pointer, grab, .. } => {
                Some(Point::new(pointer.x - grab.x, pointer.y - grab.y))
            }
            _ => None,
        }
    }

    /// `grab` is the press position relative to the card's top-left corner.
    pub fn pointer_down(&mut self, task_id: impl Into<String>, point: Point, grab: Point) {
        if self.state != DragState::Idle {
            return;
        }
        self.state = DragState::Pressed {
            task_id: task_id.into(),
            origin: point,
            grab,
        };
    }

    pub fn pointer_move(&mut self, point: Point) -> Option<DragStart> {
        match &mut self.state {
            DragState::Idle => None,
            DragState::Pressed {
                task_id,
                origin,
                grab,
            } => {
                if origin.distance_to(point) < self.activation_distance {
                    return None;
                }
                let task_id = std::mem::take(task_id);
                let grab = *grab;
                self.state = DragState::Dragging {
                    task_id: task_id.clone(),
                    pointer: point,
                    grab,
                };
                Some(DragStart { active_id: task_id })
            }
            DragState::Dragging { pointer, .. } => {
                *pointer = point;
                None
            }
        }
    }

    /// Ends the gesture. Only a real drag reports where it was released.
    pub fn pointer_up(&mut self, over_id: Option<String>) -> Option<DragEnd> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { task_id, .. } => Some(DragEnd {
                active_id: task_id,
                over_id,
            }),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
