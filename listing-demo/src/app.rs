//! The interactive listing.

use std::io;
use std::sync::Arc;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use listing::{ColumnsError, DataTable, QueryKey, QuerySnapshot, RenderState, Row};
use listing_term::{Canvas, Hit, HitMap, Painter, Terminal, Theme};
use tokio::sync::mpsc;

use crate::client::{Completion, Fetcher, QueryClient};
use crate::config::AdapterConfig;
use crate::source::{MockUserSource, QueryAdapter};
use crate::users::{self, User};

pub struct App {
    table: DataTable<User>,
    snapshot: QuerySnapshot<User>,
    /// Key of the snapshot being shown or loaded.
    requested: Option<QueryKey>,
    fetcher: Fetcher<User>,
    completions: mpsc::UnboundedReceiver<Completion<User>>,
    source: Arc<MockUserSource>,
    theme: Theme,
    hits: HitMap,
    cursor: usize,
    quit: bool,
}

impl App {
    pub fn new(config: AdapterConfig) -> Result<Self, ColumnsError> {
        let source = Arc::new(MockUserSource::new(&config));
        Self::with_source(source, config)
    }

    pub fn with_source(
        source: Arc<MockUserSource>,
        config: AdapterConfig,
    ) -> Result<Self, ColumnsError> {
        let table = DataTable::new(users::columns(), users::table_config())?
            .on_event(|event| log::info!("table event: {:?}", event));

        let adapter: Arc<dyn QueryAdapter<User>> = source.clone();
        let client = Arc::new(QueryClient::new(adapter, config));
        let (fetcher, completions) = Fetcher::new(client);

        Ok(Self {
            table,
            snapshot: QuerySnapshot::loading(),
            requested: None,
            fetcher,
            completions,
            source,
            theme: Theme::default(),
            hits: HitMap::new(),
            cursor: 0,
            quit: false,
        })
    }

    pub fn table(&self) -> &DataTable<User> {
        &self.table
    }

    pub fn snapshot(&self) -> &QuerySnapshot<User> {
        &self.snapshot
    }

    pub fn source(&self) -> &Arc<MockUserSource> {
        &self.source
    }

    /// Click targets of the last rendered frame.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub async fn run(mut self, terminal: &mut Terminal) -> io::Result<()> {
        let mut events = EventStream::new();
        self.sync();

        while !self.quit {
            self.draw(terminal)?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => return Err(e),
                    None => break,
                },
                Some(completion) = self.completions.recv() => self.complete(completion),
            }
        }

        log::info!("quitting with {} rows selected", self.table.selection().count());
        Ok(())
    }

    fn draw(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        let background = self.theme.background;
        terminal.draw(background, |canvas| self.render(canvas))
    }

    /// Paint the current view and remember its click targets.
    pub fn render(&mut self, canvas: &mut Canvas) {
        let view = self.table.view(&self.snapshot);
        let cursor = (view.render_state() == RenderState::Ready).then_some(self.cursor);
        let area = canvas.area();
        self.hits = Painter::new(&self.theme)
            .cursor(cursor)
            .paint(&view, area, canvas);
    }

    /// Request data for the table's key if it moved.
    pub fn sync(&mut self) {
        let key = self.table.query_key();
        if self.requested.as_ref() == Some(&key) {
            return;
        }
        log::debug!("requesting {}", key);
        self.requested = Some(key.clone());
        self.snapshot = self.fetcher.request(key);
        self.settle();
    }

    /// Feed a new snapshot to the table. Learning the total may move the
    /// page or shrink the page size, which asks for data again.
    fn settle(&mut self) {
        if !self.table.observe(&self.snapshot).is_empty() {
            self.sync();
        }
        self.clamp_cursor();
    }

    pub fn complete(&mut self, completion: Completion<User>) {
        let current = self.table.query_key();
        if let Some(snapshot) = self.fetcher.accept(completion, &current) {
            self.snapshot = snapshot;
            self.settle();
        }
    }

    /// Wait for the next background load and apply it. `false` once the
    /// channel is closed.
    pub async fn next_completion(&mut self) -> bool {
        match self.completions.recv().await {
            Some(completion) => {
                self.complete(completion);
                true
            }
            None => false,
        }
    }

    pub fn reload(&mut self) {
        let key = self.table.query_key();
        self.requested = Some(key.clone());
        self.snapshot = self.fetcher.reload(key);
        self.settle();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Left | KeyCode::Char('h') => {
                self.table.prev_page();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.table.next_page();
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.table.first_page();
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.table.last_page();
            }
            KeyCode::Char('[') => {
                self.table.cycle_page_size(false);
            }
            KeyCode::Char(']') => {
                self.table.cycle_page_size(true);
            }
            KeyCode::Char(c @ '1'..='9') => self.sort_nth(c as usize - '1' as usize),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Char(' ') => self.toggle_cursor_row(),
            KeyCode::Char('a') => {
                self.table.toggle_all_visible(&self.snapshot);
            }
            KeyCode::Char('c') => {
                self.table.clear_selection();
            }
            KeyCode::Char('r') => return self.reload(),
            KeyCode::Char('e') => {
                let down = self.source.toggle_outage();
                log::info!("simulated outage {}", if down { "on" } else { "off" });
                return self.reload();
            }
            _ => {}
        }
        self.sync();
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(hit) = self.hits.at(mouse.column, mouse.row).cloned() else {
                    return;
                };
                log::debug!("click on {:?}", hit);
                match hit {
                    Hit::Sort(column) => {
                        self.table.toggle_sort(&column);
                    }
                    Hit::SelectAll => {
                        self.table.toggle_all_visible(&self.snapshot);
                    }
                    Hit::ToggleRow(id) => {
                        self.table.toggle_row(&id);
                    }
                    Hit::Row(index) => self.cursor = index,
                    Hit::PrevPage => {
                        self.table.prev_page();
                    }
                    Hit::NextPage => {
                        self.table.next_page();
                    }
                    Hit::PageSize => {
                        self.table.cycle_page_size(true);
                    }
                }
            }
            MouseEventKind::ScrollDown => self.move_cursor(1),
            MouseEventKind::ScrollUp => self.move_cursor(-1),
            _ => return,
        }
        self.sync();
    }

    fn sort_nth(&mut self, n: usize) {
        let Some(id) = self.table.columns().as_slice().get(n).map(|c| c.id.clone()) else {
            return;
        };
        self.table.toggle_sort(&id);
    }

    /// Rows the cursor can land on.
    fn visible_rows(&self) -> &[User] {
        if self.snapshot.is_settled() {
            &self.snapshot.data
        } else {
            &[]
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let last = self.visible_rows().len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    fn clamp_cursor(&mut self) {
        self.move_cursor(0);
    }

    fn toggle_cursor_row(&mut self) {
        let Some(id) = self.visible_rows().get(self.cursor).map(Row::id) else {
            return;
        };
        self.table.toggle_row(&id);
    }
}
