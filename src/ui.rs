use crate::catalog::VendorCatalog;
use crate::projection::{self, ChartPoint};
use crate::shell::Shell;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    PriceChart,
    VendorDetails,
    Highlights,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::PriceChart => Page::VendorDetails,
            Page::VendorDetails => Page::Highlights,
            Page::Highlights => Page::PriceChart,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::PriceChart => Page::Highlights,
            Page::VendorDetails => Page::PriceChart,
            Page::Highlights => Page::VendorDetails,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::PriceChart => "Preços",
            Page::VendorDetails => "Detalhes",
            Page::Highlights => "Resumo",
        }
    }
}

pub struct App {
    pub catalog: VendorCatalog,
    pub shell: Shell,
    pub current_page: Page,
}

impl App {
    pub fn new(catalog: VendorCatalog) -> Self {
        let shell = Shell::new(&catalog);
        Self {
            catalog,
            shell,
            current_page: Page::PriceChart,
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Right | KeyCode::Char('l') => {
                    app.shell.next();
                    app.current_page = Page::VendorDetails;
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    app.shell.previous();
                    app.current_page = Page::VendorDetails;
                }
                KeyCode::Char(c @ '1'..='8') => {
                    app.shell.select_index(c as usize - '1' as usize);
                    app.current_page = Page::VendorDetails;
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::PriceChart => render_price_chart(f, chunks[1], app),
        Page::VendorDetails => render_vendor_details(f, chunks[1], app),
        Page::Highlights => render_highlights(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::PriceChart, Page::VendorDetails, Page::Highlights];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("{} fornecedores", app.catalog.vendors().len()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" 📊 Dashboard OCR – Comparativo de Tecnologias "),
    );

    f.render_widget(header, area);
}

fn render_price_chart(f: &mut Frame, area: Rect, app: &App) {
    let series = projection::chart_series(app.catalog.vendors());
    let bars: Vec<Bar> = series.iter().map(chart_bar).collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" 💲 Comparação de Preços (US$ / 1.000 transações) "),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Indexed(62)))
        .value_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, area);
}

fn chart_bar(point: &ChartPoint) -> Bar<'static> {
    // The chart widget takes integer heights; x10 keeps sub-dollar prices
    // visible. Display scaling only - the projected value is untouched.
    Bar::default()
        .value((point.value * 10.0).round() as u64)
        .text_value(format_price(point.value))
        .label(Line::from(truncate(&point.label, 12)))
}

fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${}", price as i64)
    } else {
        format!("${}", price)
    }
}

fn render_vendor_details(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Vendor tab strip
            Constraint::Min(0),    // Detail card
        ])
        .split(area);

    let titles: Vec<Line> = app
        .shell
        .keys()
        .iter()
        .map(|k| Line::from(k.as_str()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.shell.selected_index().unwrap_or(0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");

    f.render_widget(tabs, chunks[0]);

    render_detail_card(f, chunks[1], app);
}

fn render_detail_card(f: &mut Frame, area: Rect, app: &App) {
    let payload = match projection::detail_payload(app.shell.selected(), &app.catalog) {
        Ok(p) => p,
        Err(_) => {
            // Unreachable after catalog.verify(), but never crash the UI
            let missing = Paragraph::new("Fornecedor não encontrado").block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Detalhes "),
            );
            f.render_widget(missing, area);
            return;
        }
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Foco: ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(payload.focus.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  ✅ Vantagens",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )]),
    ];

    for advantage in &payload.advantages {
        content.push(Line::from(format!("   • {}", advantage)));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![Span::styled(
        "  ⚠️  Desvantagens",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]));

    for disadvantage in &payload.disadvantages {
        content.push(Line::from(format!("   • {}", disadvantage)));
    }

    let card = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", payload.name)),
    );

    f.render_widget(card, area);
}

fn render_highlights(f: &mut Frame, area: Rect, app: &App) {
    let cards = projection::highlight_cards(app.catalog.highlights());

    // Card grid: three columns, as many rows as needed
    let columns = 3;
    let rows = (cards.len() + columns - 1) / columns;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(6); rows])
        .split(area);

    for (row, chunk) in cards.chunks(columns).enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(row_areas[row]);

        for (col, highlight) in chunk.iter().enumerate() {
            let card = Paragraph::new(vec![
                Line::from(""),
                Line::from(vec![Span::styled(
                    format!(" {}", highlight.text),
                    Style::default().fg(Color::White),
                )]),
            ])
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(format!(" {} ", highlight.title)),
            );

            f.render_widget(card, col_areas[col]);
        }
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let status_spans = vec![
        Span::styled(
            format!(" Fornecedor: {} ", app.shell.selected()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Página | "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" Fornecedor | "),
        Span::styled("1-8", Style::default().fg(Color::Yellow)),
        Span::raw(" Direto | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Sair"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
