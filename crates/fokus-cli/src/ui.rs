//! Terminal presentation: colors, banner, prompt, help.

pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const CYAN: &str = "\x1b[96m";
pub const RED: &str = "\x1b[91m";
pub const MAGENTA: &str = "\x1b[95m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub fn print_welcome() {
    println!();
    println!("{BOLD}{GREEN}{}{RESET}", "=".repeat(60));
    println!("{BOLD}{GREEN}{:^60}{RESET}", "FOKUS - POMODORO TIMER");
    println!("{BOLD}{GREEN}{}{RESET}", "=".repeat(60));
    println!();
    println!("{MAGENTA}Things you can say:{RESET}");
    println!("  - 'start 25' or 'begin a 25 minute session' - start a timer");
    println!("  - 'time' or 'how much is left?'             - check remaining time");
    println!("  - 'pause' / 'resume'                        - pause and continue");
    println!("  - 'stop'                                    - end the session");
    println!("  - 'stats'                                   - session statistics");
    println!("  - 'motivation'                              - a nudge to keep going");
    println!("  - 'help'                                    - this summary");
    println!("  - 'exit'                                    - quit");
    println!();
}

pub fn print_response(text: &str) {
    println!("{CYAN}fokus:{RESET} {text}\n");
}

pub fn print_error(text: &str) {
    println!("{RED}fokus:{RESET} {text}\n");
}

pub fn print_goodbye() {
    println!("\n{YELLOW}Goodbye! Come back tomorrow and stay productive!{RESET}\n");
}

pub fn print_interrupt_hint() {
    println!("\n{YELLOW}Interrupted. Type 'exit' to quit.{RESET}\n");
}

pub fn print_help() {
    println!(
        "
{CYAN}{BOLD}HELP - available commands:{RESET}

{GREEN}Start a timer:{RESET}
  - 'start 25' - 25 minute timer
  - 'begin 30' - 30 minute timer
  - 'start'    - default length timer

{GREEN}Check progress:{RESET}
  - 'time' or 'remaining' - remaining time
  - 'progress'            - progress bar

{GREEN}Control:{RESET}
  - 'pause'  - pause the session
  - 'resume' - continue after a pause
  - 'stop'   - end and record the session

{GREEN}Info:{RESET}
  - 'stats'      - session statistics
  - 'motivation' - get a nudge
  - 'help'       - this screen
  - 'exit'       - quit

{YELLOW}Tips:{RESET}
  - 25 minute sessions work best for most people
  - Take a 5 minute break after each session
"
    );
}
