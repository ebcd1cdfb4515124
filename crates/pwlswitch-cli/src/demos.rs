use pwlswitch_core::circuit::Circuit;
use pwlswitch_core::Error;
use pwlswitch_linalg::{LinExpr, Symbol};

/// One built-in demo: a circuit builder plus the discretization step it
/// was designed for, matching one of spec.md §8's end-to-end scenarios.
pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    pub dt: f64,
    pub build: fn() -> Result<Circuit, Error>,
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "resistor-divider",
        description: "scenario A: two-resistor voltage divider, no switches",
        dt: 1.0,
        build: resistor_divider,
    },
    Demo {
        name: "rc-low-pass",
        description: "scenario B: single-pole RC low-pass filter",
        dt: 0.1,
        build: rc_low_pass,
    },
    Demo {
        name: "buck",
        description: "scenario C: MOSFET + diode buck converter with LC filter",
        dt: 20e-9,
        build: buck_converter,
    },
    Demo {
        name: "diode-rectifier",
        description: "scenario D: ideal diode rectifier into a resistive load",
        dt: 1.0,
        build: diode_rectifier,
    },
    Demo {
        name: "transformer",
        description: "scenario E: 1:n ideal transformer with resistive loads",
        dt: 1.0,
        build: transformer,
    },
];

fn resistor_divider() -> Result<Circuit, Error> {
    let mut cir = Circuit::new();
    let v_in = cir.nodes("v_in")?;
    let v_out = cir.nodes("v_out")?;
    let u = cir.external("u")?;
    let ground = Symbol::ground();

    cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))?;
    cir.resistor(v_in, v_out.clone(), 1.0)?;
    cir.resistor(v_out.clone(), ground, 1.0)?;
    cir.output(v_out);
    Ok(cir)
}

fn rc_low_pass() -> Result<Circuit, Error> {
    let mut cir = Circuit::new();
    let v_in = cir.nodes("v_in")?;
    let v_c = cir.nodes("v_c")?;
    let u = cir.external("u")?;
    let ground = Symbol::ground();

    cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))?;
    cir.resistor(v_in, v_c.clone(), 1.0)?;
    cir.capacitor(v_c.clone(), ground, 1.0)?;
    cir.output(v_c);
    Ok(cir)
}

/// Buck converter, grounded on the original reference's `examples/buck`
/// circuit: input source through a MOSFET high-side switch, a diode
/// freewheeling path, an LC output filter, and a resistive load.
fn buck_converter() -> Result<Circuit, Error> {
    let mut cir = Circuit::new();
    let v_in = cir.nodes("v_in")?;
    let v_sw = cir.nodes("v_sw")?;
    let v_out = cir.nodes("v_out")?;
    let input = cir.external("input")?;
    let ground = Symbol::ground();

    cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(input)))?;
    cir.mosfet(v_in, v_sw.clone())?;
    cir.diode(ground.clone(), v_sw.clone(), 0.0)?;
    cir.inductor(v_sw, v_out.clone(), 4.7e-6)?;
    cir.capacitor(v_out.clone(), ground.clone(), 150e-6)?;
    cir.resistor(v_out.clone(), ground, 2.0)?;
    cir.output(v_out);
    Ok(cir)
}

fn diode_rectifier() -> Result<Circuit, Error> {
    let mut cir = Circuit::new();
    let v_in = cir.nodes("v_in")?;
    let v_out = cir.nodes("v_out")?;
    let u = cir.external("u")?;
    let ground = Symbol::ground();

    cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))?;
    cir.diode(v_in, v_out.clone(), 0.0)?;
    cir.resistor(v_out.clone(), ground, 1.0)?;
    cir.output(v_out);
    Ok(cir)
}

fn transformer() -> Result<Circuit, Error> {
    let mut cir = Circuit::new();
    let v_in = cir.nodes("v_in")?;
    let v_out = cir.nodes("v_out")?;
    let u = cir.external("u")?;
    let ground = Symbol::ground();

    cir.voltage_source(v_in.clone(), ground.clone(), Some(LinExpr::from_symbol(u)))?;
    cir.resistor(v_in.clone(), ground.clone(), 50.0)?;
    cir.transformer(v_in, ground.clone(), v_out.clone(), ground.clone(), 2.0)?;
    cir.resistor(v_out.clone(), ground, 50.0)?;
    cir.output(v_out);
    Ok(cir)
}
