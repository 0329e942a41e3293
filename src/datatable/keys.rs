//! Key bindings for data table navigation.
//!
//! - **Pages**: `←/h/pgup` (previous), `→/l/pgdown` (next)
//! - **Jumps**: `g/home` (first page), `G/end` (last page)
//! - **Size**: `s` (cycle through the page-size menu)
//! - **Reload**: `r`

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings handled by [`Model::update`](super::Model::update).
#[derive(Debug, Clone)]
pub struct DataTableKeyMap {
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
    /// Jump to the first page.
    pub first_page: key::Binding,
    /// Jump to the last page.
    pub last_page: key::Binding,
    /// Move to the next entry of the page-size menu.
    pub cycle_page_size: key::Binding,
    /// Reload the current page.
    pub reload: key::Binding,
}

impl Default for DataTableKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h/pgup", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
            ])
            .with_help("→/l/pgdown", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
            cycle_page_size: key::Binding::new(vec![KeyCode::Char('s')])
                .with_help("s", "page size"),
            reload: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reload"),
        }
    }
}

impl key::KeyMap for DataTableKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page, &self.cycle_page_size]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
            vec![&self.cycle_page_size, &self.reload],
        ]
    }
}
