use judge_runner_core::{Plan, ProcessCommand};

/// Dry-run output: the toolchain and the commands a run would spawn
pub fn format_plan(plan: &Plan) -> Vec<String> {
    let mut lines = vec![format!("Toolchain: {}", plan.toolchain)];

    match plan.compile {
        Some(ref compile) => {
            lines.push(format!("Compile: {}", compile.to_shell_command()));
            lines.extend(breakdown(compile));
        }
        None => lines.push("Compile: (none)".to_string()),
    }

    lines.push(format!("Run: {}", plan.run_shell_command()));
    lines.extend(breakdown(&plan.run));

    if let Some(artifact) = plan.toolchain.artifact() {
        lines.push(format!("Cleanup: remove {}", artifact.display()));
    }
    lines
}

fn breakdown(command: &ProcessCommand) -> Vec<String> {
    let mut lines = vec![format!("   • command: {}", command.program)];

    let mut i = 0;
    while i < command.args.len() {
        let arg = &command.args[i];
        if (arg == "-o" || arg == "-cp") && i + 1 < command.args.len() {
            let label = if arg == "-o" { "output" } else { "classpath" };
            lines.push(format!("   • {}: {}", label, command.args[i + 1]));
            i += 1;
        } else if arg.starts_with('-') {
            lines.push(format!("   • flag: {arg}"));
        } else {
            lines.push(format!("   • arg: {arg}"));
        }
        i += 1;
    }
    lines
}

pub fn print_plan(plan: &Plan) {
    for line in format_plan(plan) {
        println!("{line}");
    }
}
