use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one row of mini calendars (border + weekdays + six weeks)
const CALENDAR_ROW_HEIGHT: u16 = 9;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub stats_area: Rect,
    pub today_area: Rect,
    pub calendars_area: Rect,
    pub grid_area: Rect,
    pub guide_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: yearly goal
/// - Dashboard: Stats (60%) | Today notes (40%)
/// - Mini calendars: one row, two when expanded
/// - Grid, with the guide on the right when it is not collapsed
pub fn create_layout(area: Rect, calendar_expanded: bool, show_guide: bool) -> MainLayout {
    let calendar_height = if calendar_expanded {
        CALENDAR_ROW_HEIGHT * 2
    } else {
        CALENDAR_ROW_HEIGHT
    };

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Keybindings bar
            Constraint::Length(3),               // Goal header
            Constraint::Length(9),               // Stats + today
            Constraint::Length(calendar_height), // Mini calendars
            Constraint::Min(0),                  // Grid
        ])
        .split(area);

    let dashboard = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Stats pane
            Constraint::Percentage(40), // Today pane
        ])
        .split(main_chunks[2]);

    let (grid_area, guide_area) = if show_guide {
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(75), // Grid
                Constraint::Percentage(25), // Guide
            ])
            .split(main_chunks[4]);
        (bottom[0], Some(bottom[1]))
    } else {
        (main_chunks[4], None)
    };

    MainLayout {
        keybindings_area: main_chunks[0],
        header_area: main_chunks[1],
        stats_area: dashboard[0],
        today_area: dashboard[1],
        calendars_area: main_chunks[3],
        grid_area,
        guide_area,
    }
}

/// Split the calendars area into one rect per visible month (6 per row)
pub fn calendar_cells(area: Rect, expanded: bool) -> Vec<Rect> {
    let rows: Vec<Rect> = if expanded {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(area)
            .to_vec()
    } else {
        vec![area]
    };

    rows.into_iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 6); 6])
                .split(row)
                .to_vec()
        })
        .collect()
}

/// Create centered modal area
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
