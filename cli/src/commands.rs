//! Sample commands registered by the demo binary.

use command_dispatch_core::{
    CommandSchema, DataType, ParameterMap, ParameterSchema, RegistrationError,
};
use command_dispatch_engine::Dispatcher;

const CM_PER_INCH: f64 = 2.54;

/// Registers every sample command, stopping at the first rejected schema.
pub fn register_all(dispatcher: &mut Dispatcher) -> Result<(), RegistrationError> {
    for schema in [greet(), add(), echo(), convert()] {
        dispatcher.register(schema)?;
    }
    Ok(())
}

fn greet() -> CommandSchema {
    CommandSchema::new("greet", |params| {
        let greeting = format!("Hello, {}!", params.get("name").unwrap_or("world"));
        if params.flag("loud") {
            println!("{}", greeting.to_uppercase());
        } else {
            println!("{greeting}");
        }
    })
    .with_alias("g")
    .with_description("Print a greeting")
    .with_parameter(
        ParameterSchema::new("name")
            .with_alias("n")
            .at_position(1)
            .with_description("Who to greet"),
    )
    .with_parameter(
        ParameterSchema::new("loud")
            .with_alias("l")
            .with_type(DataType::Boolean)
            .with_description("Shout the greeting"),
    )
}

fn add() -> CommandSchema {
    CommandSchema::new("add", |params| {
        let left = integer(params, "left");
        let right = integer(params, "right");
        match left.checked_add(right) {
            Some(sum) => println!("{sum}"),
            None => eprintln!("add: {left} + {right} overflows"),
        }
    })
    .with_alias("sum")
    .with_description("Add two integers")
    .with_parameter(
        ParameterSchema::new("left")
            .at_position(1)
            .with_type(DataType::Integer),
    )
    .with_parameter(
        ParameterSchema::new("right")
            .at_position(2)
            .with_type(DataType::Integer),
    )
}

fn echo() -> CommandSchema {
    CommandSchema::new("echo", |params| {
        let text = params.get("text").unwrap_or_default();
        let times = params
            .parse::<usize>("times")
            .and_then(Result::ok)
            .unwrap_or(1);
        println!("{}", vec![text; times].join(" "));
    })
    .with_description("Print text, optionally repeated")
    .with_parameter(ParameterSchema::new("text").at_position(1))
    .with_parameter(
        ParameterSchema::new("times")
            .with_alias("t")
            .with_type(DataType::Integer)
            .with_validator(|raw| raw.parse::<u8>().is_ok_and(|n| (1..=10).contains(&n)))
            .with_error_message("times must be a whole number between 1 and 10")
            .with_description("Repetitions (1-10)"),
    )
}

fn convert() -> CommandSchema {
    CommandSchema::new("convert", |params| {
        let value = params
            .parse::<f64>("value")
            .and_then(Result::ok)
            .unwrap_or_default();
        let unit = params.get("unit").unwrap_or("cm");
        if unit.eq_ignore_ascii_case("in") {
            println!("{:.2} cm", value * CM_PER_INCH);
        } else {
            println!("{:.2} in", value / CM_PER_INCH);
        }
    })
    .with_alias("conv")
    .with_description("Convert a length between centimeters and inches")
    .with_parameter(
        ParameterSchema::new("value")
            .with_alias("v")
            .at_position(1)
            .with_type(DataType::Decimal),
    )
    .with_parameter(
        ParameterSchema::new("unit")
            .with_alias("u")
            .at_position(2)
            .with_type(DataType::Choice(vec!["cm".to_string(), "in".to_string()]))
            .with_description("Unit of the given value"),
    )
}

fn integer(params: &ParameterMap, name: &str) -> i64 {
    params.parse(name).and_then(Result::ok).unwrap_or(0)
}
