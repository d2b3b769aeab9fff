#[macro_use]
extern crate clap;

use std::io::{self, Write};
use thompson::catalog::{self, Example};
use yansi::Paint;

fn main() {
	// Parse options.
	let yaml = load_yaml!("thompson.yml");
	let matches = clap::App::from_yaml(yaml).get_matches();

	if let Err(e) = run(&matches) {
		eprintln!("{}{} {}", Paint::red("error").bold(), Paint::new(':').bold(), e);
		std::process::exit(1)
	}
}

fn run(matches: &clap::ArgMatches) -> Result<(), Error> {
	// Init logger.
	let verbosity = matches.occurrences_of("verbose") as usize;
	stderrlog::new().verbosity(verbosity).init()?;

	let stdout = io::stdout();
	let mut out = stdout.lock();

	match matches.subcommand() {
		("list", Some(_m)) => {
			for example in catalog::examples() {
				writeln!(out, "{}\t{}", example.name, example.expr)?
			}

			Ok(())
		}
		("show", Some(m)) => {
			let minimize = m.is_present("minimize");
			match m.value_of("NAME") {
				Some(name) => show(&mut out, find(name)?, minimize),
				None => show_all(&mut out, minimize),
			}
		}
		("dot", Some(m)) => {
			let example = find(m.value_of("NAME").unwrap_or_default())?;
			log::info!("building `{}`...", example.expr);
			let nfa = example.build();

			if m.is_present("dfa") || m.is_present("minimize") {
				log::info!("determinizing...");
				let mut dfa = nfa.determinize();
				if m.is_present("minimize") {
					log::info!("minimizing...");
					dfa = dfa.minimize();
				}

				dfa.dot_write(&mut out)?
			} else {
				nfa.dot_write(&mut out)?
			}

			Ok(())
		}
		("", None) => show_all(&mut out, false),
		(name, _) => Err(Error::UnknownCommand(name.to_string())),
	}
}

fn find(name: &str) -> Result<&'static Example, Error> {
	catalog::get(name).ok_or_else(|| Error::UnknownExpression(name.to_string()))
}

fn show_all<W: Write>(out: &mut W, minimize: bool) -> Result<(), Error> {
	for (i, example) in catalog::examples().iter().enumerate() {
		if i > 0 {
			writeln!(out)?
		}

		show(out, example, minimize)?
	}

	Ok(())
}

fn show<W: Write>(out: &mut W, example: &Example, minimize: bool) -> Result<(), Error> {
	writeln!(
		out,
		"{} {}",
		Paint::new(format!("{})", example.name)).bold(),
		Paint::new(&example.expr).bold()
	)?;

	log::info!("building `{}`...", example.expr);
	let nfa = example.build();
	writeln!(out, "\n{}", Paint::blue("NFA").bold())?;
	write!(out, "{}", nfa.dump())?;

	log::info!("determinizing...");
	let mut dfa = nfa.determinize();
	if minimize {
		log::info!("minimizing...");
		dfa = dfa.minimize();
	}

	writeln!(out, "\n{}", Paint::blue("DFA").bold())?;
	write!(out, "{}", dfa.table())?;
	writeln!(out, "\n{}", Paint::blue("States").bold())?;
	write!(out, "{}", dfa.legend())?;

	Ok(())
}

enum Error {
	UnknownCommand(String),
	UnknownExpression(String),
	IO(io::Error),
	Logger(log::SetLoggerError),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::UnknownCommand(name) => write!(f, "unknown command `{}`", name),
			Self::UnknownExpression(name) => {
				use itertools::Itertools;
				write!(
					f,
					"unknown expression `{}` (expected one of {})",
					name,
					catalog::examples().iter().map(|e| e.name).format(", ")
				)
			}
			Self::IO(e) => write!(f, "{}", e),
			Self::Logger(e) => write!(f, "unable to initialize the logger: {}", e),
		}
	}
}

impl From<io::Error> for Error {
	fn from(e: io::Error) -> Self {
		Self::IO(e)
	}
}

impl From<log::SetLoggerError> for Error {
	fn from(e: log::SetLoggerError) -> Self {
		Self::Logger(e)
	}
}
