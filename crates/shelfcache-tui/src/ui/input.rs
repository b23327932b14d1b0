//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, AppState, PriceBound, Tab};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    match app.state {
        AppState::ShowingHelp => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.state = AppState::Normal;
            }
            false
        }
        AppState::ConfirmingQuit => handle_quit_confirmation(app, key),
        AppState::Searching => {
            handle_search_input(app, key, now);
            false
        }
        AppState::EditingPrice(bound) => {
            handle_price_input(app, bound, key, now);
            false
        }
        AppState::Quitting => true,
        AppState::Normal => {
            handle_normal_input(app, key);
            false
        }
    }
}

fn handle_quit_confirmation(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.state = AppState::Quitting;
            return true;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.state = AppState::Normal;
        }
        _ => {}
    }
    false
}

fn handle_normal_input(app: &mut App, key: KeyEvent) {
    // Global keys
    match key.code {
        KeyCode::Char('q') => app.state = AppState::ConfirmingQuit,
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,
        KeyCode::Tab => app.current_tab = app.current_tab.next(),
        KeyCode::BackTab => app.current_tab = app.current_tab.prev(),
        KeyCode::Char('u') => app.start_refresh(true),
        KeyCode::Char('/') => {
            app.current_tab = Tab::Inventory;
            app.state = AppState::Searching;
        }
        _ => {
            if app.current_tab == Tab::Inventory {
                handle_inventory_input(app, key);
            }
        }
    }
}

fn handle_inventory_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('p') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('n') => app.next_page(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(page) = c.to_digit(10) {
                app.go_to_page(page as usize);
            }
        }
        KeyCode::Char('f') => app.cycle_category(true),
        KeyCode::Char('F') => app.cycle_category(false),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('[') => app.state = AppState::EditingPrice(PriceBound::Min),
        KeyCode::Char(']') => app.state = AppState::EditingPrice(PriceBound::Max),
        KeyCode::Esc => app.reset_filters(),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
            app.clear_search();
        }
        KeyCode::Enter => {
            app.state = AppState::Normal;
            // Keep search query active
            app.commit_search();
        }
        KeyCode::Backspace => app.pop_search_char(now),
        KeyCode::Char(c) => app.push_search_char(c, now),
        _ => {}
    }
}

fn handle_price_input(app: &mut App, bound: PriceBound, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
            app.clear_price(bound);
        }
        KeyCode::Enter => {
            app.state = AppState::Normal;
            app.commit_price();
        }
        KeyCode::Tab => {
            app.commit_price();
            app.state = AppState::EditingPrice(match bound {
                PriceBound::Min => PriceBound::Max,
                PriceBound::Max => PriceBound::Min,
            });
        }
        KeyCode::Backspace => app.pop_price_char(bound, now),
        KeyCode::Char(c) => app.push_price_char(bound, c, now),
        _ => {}
    }
}
