use std::io::{Read, Write};

use clap::{Arg, ArgMatches};
use eyre::WrapErr;
use naqed_codegen::{GeneratorOptions, ResolverMap, SchemaDocument};
use naqed_core::Specification;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Sdl,
    Json,
}

/// What `--format json` writes: the pair a schema-execution engine is built from.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaBundle {
    type_defs: String,
    resolvers: ResolverMap,
}

pub struct GenerateCommand;

impl GenerateCommand {
    pub fn new_cmd() -> clap::Command {
        clap::Command::new("generate")
            .about("Generate an SDL document from a JSON specification")
            .arg(
                Arg::new("spec")
                    .long("spec")
                    .short('s')
                    .required(true)
                    .help("Path to the specification, or - to read stdin"),
            )
            .arg(Arg::new("output").long("output").short('o'))
            .arg(
                Arg::new("indent")
                    .long("indent")
                    .value_parser(clap::value_parser!(usize))
                    .default_value("2"),
            )
            .arg(
                Arg::new("input-suffix")
                    .long("input-suffix")
                    .default_value("Input"),
            )
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_parser(["sdl", "json"])
                    .default_value("sdl"),
            )
    }

    pub fn exec(arg_matches: &ArgMatches) -> eyre::Result<()> {
        let spec_path = arg_matches
            .get_one::<String>("spec")
            .ok_or_else(|| eyre::eyre!("missing --spec"))?;
        let raw = read_spec(spec_path)?;

        let options = options_from(arg_matches)?;
        let format = match arg_matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Sdl,
        };

        tracing::debug!(spec = %spec_path, ?format, "generating schema");
        let code = render(&raw, options, format)
            .wrap_err_with(|| format!("could not generate schema from {spec_path}"))?;

        if let Some(output) = arg_matches.get_one::<String>("output") {
            let mut file = std::fs::File::create(output)?;
            file.write_all(code.as_bytes())?;
            file.write_all(b"\n")?;
            tracing::info!(output = %output, "wrote schema");
        } else {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", code)?;
        }

        Ok(())
    }
}

fn read_spec(path: &str) -> eyre::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .wrap_err("could not read specification from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(path).wrap_err_with(|| format!("could not read {path}"))
}

fn options_from(arg_matches: &ArgMatches) -> eyre::Result<GeneratorOptions> {
    let mut builder = GeneratorOptions::builder();

    if let Some(indent) = arg_matches.get_one::<usize>("indent") {
        builder.indent(" ".repeat(*indent));
    }
    if let Some(suffix) = arg_matches.get_one::<String>("input-suffix") {
        builder.input_suffix(suffix.as_str());
    }

    builder.build().wrap_err("invalid generator options")
}

pub fn render(raw: &str, options: GeneratorOptions, format: OutputFormat) -> eyre::Result<String> {
    let spec: Specification = raw.parse()?;
    let document = SchemaDocument::with_options(&spec, options);
    let type_defs = document.type_defs()?;

    match format {
        OutputFormat::Sdl => Ok(type_defs),
        OutputFormat::Json => {
            let bundle = SchemaBundle {
                type_defs,
                resolvers: document.resolvers(),
            };
            Ok(serde_json::to_string_pretty(&bundle)?)
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use naqed_codegen::GeneratorOptions;
    use pretty_assertions::assert_eq;

    use super::{render, GenerateCommand, OutputFormat};

    const SPEC: &str = r#"{
        "$A": { "name": "STRING" },
        "~CreateA": { "$A": null, "$input": ["A"] }
    }"#;

    #[test]
    fn renders_sdl() {
        let output = render(SPEC, GeneratorOptions::default(), OutputFormat::Sdl).unwrap();

        assert_eq!(
            output,
            "type A {\n  name: String\n}\n\ninput AInput {\n  name: String\n}\n\ntype Mutation {\n  CreateA(input: [AInput]): A\n}"
        );
    }

    #[test]
    fn renders_json_bundle() {
        let output = render(
            r#"{ "hello": { "$STRING": null } }"#,
            GeneratorOptions::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "typeDefs": "type Query {\n  hello: String\n}",
                "resolvers": {}
            })
        );
    }

    #[test]
    fn invalid_specifications_fail() {
        assert!(render("[]", GeneratorOptions::default(), OutputFormat::Sdl).is_err());
        assert!(render("{ nope", GeneratorOptions::default(), OutputFormat::Sdl).is_err());
    }

    #[test]
    fn generate_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let spec_path = dir.path().join("spec.json");
        let output_path = dir.path().join("schema.graphql");
        std::fs::File::create(&spec_path)
            .unwrap()
            .write_all(SPEC.as_bytes())
            .unwrap();

        let matches = GenerateCommand::new_cmd()
            .try_get_matches_from([
                "generate",
                "--spec",
                spec_path.to_str().unwrap(),
                "--output",
                output_path.to_str().unwrap(),
                "--indent",
                "4",
                "--input-suffix",
                "Data",
            ])
            .unwrap();
        GenerateCommand::exec(&matches).unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(
            written,
            "type A {\n    name: String\n}\n\ninput AData {\n    name: String\n}\n\ntype Mutation {\n    CreateA(input: [AData]): A\n}\n"
        );
    }

    #[test]
    fn rejects_unknown_formats() {
        let result = GenerateCommand::new_cmd().try_get_matches_from([
            "generate",
            "--spec",
            "spec.json",
            "--format",
            "yaml",
        ]);

        assert!(result.is_err());
    }
}
