// src/session/console.rs

use std::io::BufRead;
use tracing::{info, warn};

use crate::error::ReportError;
use crate::io::display::DisplaySurface;
use crate::model::inputs::Field;
use crate::session::state::Session;

/// One line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    Show,
    Quit,
    Reset,
    Edit { field: Field, raw: &'a str },
    DaysToFill(&'a str),
}

/// Reads one console line. `None` means the line was ignored (already logged).
pub fn parse_command(line: &str) -> Option<Command<'_>> {
    match line.trim() {
        "" | "show" => Some(Command::Show),
        "quit" | "exit" => Some(Command::Quit),
        "reset" => Some(Command::Reset),
        edit => {
            let Some((name, raw)) = edit.split_once('=') else {
                warn!(line = edit, "expected field=value, show, reset or quit");
                return None;
            };
            let name = name.trim();
            if matches!(name, "days-to-fill" | "days_to_fill" | "daysToFill") {
                return Some(Command::DaysToFill(raw));
            }
            match name.parse() {
                Ok(field) => Some(Command::Edit { field, raw }),
                Err(err) => {
                    warn!(error = %err, "ignoring line");
                    None
                }
            }
        }
    }
}

/// Line-driven stand-in for the web form.
///
/// Renders once up front, then again after every show, reset and accepted
/// edit. Rejected edits are logged by the session and keep the old value.
/// Stops at `quit`/`exit` or end of input.
pub fn run_console<R, S>(session: &mut Session, input: R, surface: &mut S) -> Result<(), ReportError>
where
    R: BufRead,
    S: DisplaySurface + ?Sized,
{
    surface.render(&session.view())?;

    for line in input.lines() {
        let line = line?;
        let accepted = match parse_command(&line) {
            None => false,
            Some(Command::Quit) => break,
            Some(Command::Show) => true,
            Some(Command::Reset) => {
                session.reset();
                true
            }
            Some(Command::Edit { field, raw }) => session.edit(field, raw).is_ok(),
            Some(Command::DaysToFill(raw)) => session.edit_days_to_fill(raw).is_ok(),
        };
        if accepted {
            surface.render(&session.view())?;
        }
    }

    info!(rejected = session.rejected_edits(), "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::engine::Estimator;
    use crate::io::display::{JsonReport, TextCard, CTA_ENABLED, CTA_LOCKED};

    fn run_text(session: &mut Session, script: &str) -> String {
        let mut card = TextCard::new(Vec::new());
        run_console(session, script.as_bytes(), &mut card).unwrap();
        String::from_utf8(card.into_inner()).unwrap()
    }

    fn renders(text: &str) -> usize {
        text.matches("Revenue Lost Per Week").count()
    }

    #[test]
    fn parses_console_lines() {
        assert_eq!(parse_command("  "), Some(Command::Show));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(
            parse_command("empty_chairs=3"),
            Some(Command::Edit {
                field: Field::EmptyChairs,
                raw: "3"
            })
        );
        assert_eq!(parse_command("days-to-fill=21"), Some(Command::DaysToFill("21")));
        assert_eq!(parse_command("chairs 3"), None);
        assert_eq!(parse_command("tips=20"), None);
    }

    #[test]
    fn scripted_session_renders_after_each_accepted_line() {
        let mut session = Session::new(Estimator::default());
        let script = "average-ticket=100\n\
                      chairs 3\n\
                      tips=20\n\
                      empty-chairs=-1\n\
                      reset\n\
                      empty-chairs=2\n\
                      quit\n\
                      empty-chairs=9\n";
        let text = run_text(&mut session, script);

        // Initial card, ticket edit, reset, chairs edit.
        assert_eq!(renders(&text), 4);
        assert!(text.contains("$2,500"));
        assert!(text.contains("$4,250"));
        assert!(text.ends_with(&format!("{CTA_ENABLED}\n")));

        assert_eq!(session.input().empty_chairs, Some(2));
        assert_eq!(session.input().average_ticket, Some(85.0));
        assert_eq!(session.metrics().lost_revenue_per_week, 4250.0);
        assert!(session.cta_enabled());
        assert_eq!(session.rejected_edits(), 1);
    }

    #[test]
    fn cta_stays_locked_until_an_edit_lands() {
        let mut session = Session::new(Estimator::default());
        let text = run_text(&mut session, "show\nempty-chairs=1.5\n");

        assert_eq!(renders(&text), 2);
        assert!(text.contains(CTA_LOCKED));
        assert!(!text.contains(CTA_ENABLED));
        assert!(!session.cta_enabled());
    }

    #[test]
    fn days_to_fill_line_converts_to_weeks() {
        let mut session = Session::new(Estimator::default());
        let mut report = JsonReport::lines(Vec::new());
        run_console(&mut session, "days-to-fill=14\n".as_bytes(), &mut report).unwrap();

        let out = String::from_utf8(report.into_inner()).unwrap();
        let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["input"]["weeks_to_fill"], 2.0);
        assert_eq!(last["metrics"]["cumulative_loss"], 4250.0);
        assert_eq!(last["cta_enabled"], true);
    }

    #[test]
    fn end_of_input_ends_the_session() {
        let mut session = Session::new(Estimator::default());
        let text = run_text(&mut session, "clients-per-day=6");

        assert_eq!(renders(&text), 2);
        assert_eq!(session.input().clients_per_day, Some(6.0));
    }
}
