//! Movement and scrolling

use crate::app::state::View;

use super::super::App;

impl App {
    pub(super) fn move_up(&mut self) {
        match self.state.view {
            View::Reader => self.state.scroll_reader_up(),
            _ => self.state.move_up(),
        }
    }

    pub(super) fn move_down(&mut self) {
        match self.state.view {
            View::Reader => self.state.scroll_reader_down(),
            _ => self.state.move_down(),
        }
    }

    pub(super) fn move_to_top(&mut self) {
        match self.state.view {
            View::Reader => self.state.reset_reader_scroll(),
            _ => self.state.move_to_top(),
        }
    }

    pub(super) fn move_to_bottom(&mut self) {
        match self.state.view {
            View::Reader => self.state.reader_scroll = self.state.max_reader_scroll(),
            _ => self.state.move_to_bottom(),
        }
    }

    pub(super) fn move_page(&mut self, delta: i32) {
        match self.state.view {
            View::Reader => {
                let max = self.state.max_reader_scroll() as i32;
                self.state.reader_scroll =
                    (self.state.reader_scroll as i32 + delta).clamp(0, max.max(0)) as usize;
            }
            _ => self.state.move_page(delta),
        }
    }
}
