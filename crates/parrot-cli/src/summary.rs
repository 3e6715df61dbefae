use console::Style;
use parrot_core::pipeline::config::PipelineConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

pub fn print_generate_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Parrot Pipeline"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Template"),
        s.value.apply_to(&config.template)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Assets"),
        s.path.apply_to(config.assets_dir.display())
    );
    match &config.face_model {
        Some(model) => println!(
            "  {:<14}{}",
            s.label.apply_to("Face model"),
            s.path.apply_to(model.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Face model"),
            s.disabled.apply_to("none (fallback resize)")
        ),
    }
    println!(
        "  {:<14}{}x{} ({}% face)",
        s.label.apply_to("Crop"),
        config.face.width,
        config.face.height,
        config.face.face_percent
    );
    println!(
        "  {:<14}{} ms/frame",
        s.label.apply_to("Delay"),
        config.animation.frame_delay_ms
    );
    println!();
}
