use std::io::{self, Write};

use clap::Parser;
use log::debug;
use tcalc::{
    ast::{ast::Node, operators::Command},
    errors::errors::Error,
    lexer::lexer::strip_whitespace,
    parser::parser::parse,
    session::session::Session,
};

const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BLUE: &str = "\x1b[34m";

/// An interactive terminal calculator. Type an expression, get a number back.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    env_logger::init();
    let _args = Args::parse();

    let mut session = Session::new();

    loop {
        println!(
            "Enter your expression to evaluate.{}\t{} | {}{}",
            ANSI_BLUE,
            session.angle_mode(),
            session.decimal_mode(),
            ANSI_RESET
        );

        let mut line = String::new();
        if io::stdin().read_line(&mut line).unwrap() == 0 {
            println!();
            break;
        }

        if line.trim().is_empty() {
            continue;
        }

        let node = match parse(&line, &mut session) {
            Ok(node) => node,
            Err(error) => {
                display_error(&error, &line);
                continue;
            }
        };

        let value = match node.evaluate(&mut session) {
            Ok(value) => value,
            Err(error) => {
                display_error(&error, &line);
                continue;
            }
        };

        debug!("result: {}", value);

        match node {
            Node::Command(Command::Exit) => break,
            Node::Command(Command::Clear) => {
                // Cursor home followed by a full screen wipe.
                print!("\x1b[H\x1b[2J");
                io::stdout().flush().unwrap();
            }
            Node::Command(_) => {}
            _ => println!("= {}", session.format_number(value)),
        }
    }
}

fn display_error(error: &Error, line: &str) {
    /*
        Error: SyntaxError (unexpected end of input at index 4, expected: CloseParen)
        -> (1+2
           ----^
    */

    println!("Error: {} ({})", error.name(), error);

    if let Some(offset) = error.offset() {
        // Offsets index into the whitespace-stripped text.
        println!("-> {}", strip_whitespace(line));

        let arrows = offset + 1;
        println!("   {:->arrows$}", "^");
    }
}
