use proc_macro2::TokenStream;
use quote::quote;
use std::{
	env,
	fs::{self, File},
	io::{self, BufReader, Read, Write},
	path::{Path, PathBuf},
};

#[derive(Debug)]
pub enum Error {
	IO(io::Error),
	Env(env::VarError),
	Toml(toml::de::Error),
	Data(DataError),
}

impl From<io::Error> for Error {
	fn from(e: io::Error) -> Self {
		Self::IO(e)
	}
}

impl From<env::VarError> for Error {
	fn from(e: env::VarError) -> Self {
		Self::Env(e)
	}
}

impl From<toml::de::Error> for Error {
	fn from(e: toml::de::Error) -> Self {
		Self::Toml(e)
	}
}

impl From<DataError> for Error {
	fn from(e: DataError) -> Self {
		Self::Data(e)
	}
}

#[derive(Debug)]
pub enum DataError {
	DocumentNotATable,
	CaseNotArray,
	CaseNotTable,
	CaseNoName,
	NameNotString,
	CaseNoExpr,
	WordsNotArray,
	WordNotString,
	InvalidExpr(String),
}

fn main() -> Result<(), Error> {
	let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
	let out_dir = PathBuf::from(env::var("OUT_DIR")?);

	let mut source = manifest_dir;
	source.push("tests");
	source.push("languages.toml");
	println!("cargo:rerun-if-changed={}", source.to_string_lossy());

	let mut output = out_dir;
	output.push("languages.rs");

	let contents = read_file(&source)?;
	let toml: toml::Value = toml::from_str(&contents)?;
	let test = Test::from_toml(toml)?;
	let code = test.generate();
	write_file(output, format!("{}", code))?;

	Ok(())
}

fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
	let file = fs::File::open(path)?;
	let mut buf_reader = BufReader::new(file);
	let mut contents = String::new();
	buf_reader.read_to_string(&mut contents)?;
	Ok(contents)
}

fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> io::Result<()> {
	let mut file = File::create(path)?;
	file.write_all(contents.as_ref())
}

/// Test description.
pub struct Test {
	cases: Vec<Case>,
}

impl Test {
	fn from_toml(toml: toml::Value) -> Result<Self, DataError> {
		let table = toml.as_table().ok_or(DataError::DocumentNotATable)?;

		let mut cases = Vec::new();
		if let Some(value) = table.get("case") {
			let values = value.as_array().ok_or(DataError::CaseNotArray)?;
			for case in values {
				cases.push(Case::from_toml(case)?)
			}
		}

		Ok(Self { cases })
	}

	fn generate(&self) -> TokenStream {
		let cases = self.cases.iter().map(|c| c.generate());

		quote! {
			#(#cases)*
		}
	}
}

/// Language test case.
///
/// The expression is built and determinized, then every word of `accept`
/// must be recognized and every word of `reject` refused.
pub struct Case {
	name: String,
	expr: ExprDesc,
	accept: Vec<String>,
	reject: Vec<String>,
}

impl Case {
	fn from_toml(toml: &toml::Value) -> Result<Self, DataError> {
		let table = toml.as_table().ok_or(DataError::CaseNotTable)?;
		let name = table
			.get("name")
			.ok_or(DataError::CaseNoName)?
			.as_str()
			.ok_or(DataError::NameNotString)?;
		let expr = ExprDesc::from_toml(table.get("expr").ok_or(DataError::CaseNoExpr)?)?;

		Ok(Self {
			name: name.to_string(),
			expr,
			accept: words(table.get("accept"))?,
			reject: words(table.get("reject"))?,
		})
	}

	fn generate(&self) -> TokenStream {
		let id = quote::format_ident!("{}", self.name);
		let expr = self.expr.generate();
		let accept = &self.accept;
		let reject = &self.reject;

		quote! {
			#[test]
			fn #id() {
				let expr = #expr;
				common::check_language(&expr, &[#(#accept),*], &[#(#reject),*]);
			}
		}
	}
}

fn words(value: Option<&toml::Value>) -> Result<Vec<String>, DataError> {
	let mut result = Vec::new();
	if let Some(value) = value {
		for word in value.as_array().ok_or(DataError::WordsNotArray)? {
			result.push(word.as_str().ok_or(DataError::WordNotString)?.to_string())
		}
	}

	Ok(result)
}

/// Expression written as nested TOML values.
///
/// A string is a literal word (a single character gives a literal
/// character). An operator is a table with a single key naming it:
/// `{ star = { or = ["a", "b"] } }`.
pub enum ExprDesc {
	Epsilon,
	Char(char),
	Str(String),
	Class(String),
	Concat(Vec<ExprDesc>),
	Or(Vec<ExprDesc>),
	Star(Box<ExprDesc>),
	Plus(Box<ExprDesc>),
	Optional(Box<ExprDesc>),
	Group(Box<ExprDesc>),
}

impl ExprDesc {
	fn from_toml(toml: &toml::Value) -> Result<Self, DataError> {
		match toml {
			toml::Value::String(s) => {
				let mut chars = s.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => Ok(Self::Char(c)),
					_ => Ok(Self::Str(s.clone())),
				}
			}
			toml::Value::Table(table) if table.len() == 1 => {
				let (op, arg) = table
					.iter()
					.next()
					.ok_or_else(|| DataError::InvalidExpr("empty operator table".to_string()))?;

				match (op.as_str(), arg) {
					("eps", _) => Ok(Self::Epsilon),
					("class", toml::Value::String(chars)) => Ok(Self::Class(chars.clone())),
					("concat", toml::Value::Array(args)) => Ok(Self::Concat(Self::list_from_toml(args)?)),
					("or", toml::Value::Array(args)) => Ok(Self::Or(Self::list_from_toml(args)?)),
					("star", arg) => Ok(Self::Star(Box::new(Self::from_toml(arg)?))),
					("plus", arg) => Ok(Self::Plus(Box::new(Self::from_toml(arg)?))),
					("opt", arg) => Ok(Self::Optional(Box::new(Self::from_toml(arg)?))),
					("group", arg) => Ok(Self::Group(Box::new(Self::from_toml(arg)?))),
					(op, arg) => Err(DataError::InvalidExpr(format!(
						"invalid operand `{}` for `{}`",
						arg, op
					))),
				}
			}
			other => Err(DataError::InvalidExpr(format!("unexpected value `{}`", other))),
		}
	}

	fn list_from_toml(args: &[toml::Value]) -> Result<Vec<Self>, DataError> {
		args.iter().map(Self::from_toml).collect()
	}

	fn generate(&self) -> TokenStream {
		match self {
			Self::Epsilon => quote! { thompson::Expr::Epsilon },
			Self::Char(c) => quote! { thompson::Expr::Char(#c) },
			Self::Str(s) => quote! { thompson::Expr::string(#s) },
			Self::Class(s) => quote! { thompson::Expr::class(#s) },
			Self::Concat(parts) => {
				let parts = parts.iter().map(|p| p.generate());
				quote! { thompson::Expr::concat(vec![#(#parts),*]) }
			}
			Self::Or(parts) => {
				let parts = parts.iter().map(|p| p.generate());
				quote! { thompson::Expr::or(vec![#(#parts),*]) }
			}
			Self::Star(e) => {
				let e = e.generate();
				quote! { thompson::Expr::star(#e) }
			}
			Self::Plus(e) => {
				let e = e.generate();
				quote! { thompson::Expr::plus(#e) }
			}
			Self::Optional(e) => {
				let e = e.generate();
				quote! { thompson::Expr::optional(#e) }
			}
			Self::Group(e) => {
				let e = e.generate();
				quote! { thompson::Expr::group(#e) }
			}
		}
	}
}
