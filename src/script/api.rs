//! Object model registered on the Rhai engine
//!
//! The root object (`HostHandle`) owns an `Arc` to the run's services, so a
//! copy stored in a map or captured by a closure keeps working wherever it
//! travels, including inside `fn` bodies that cannot see the top-level scope.

use crate::error::{HostError, HostResult};
use crate::host::HostServices;
use crate::state::{
    Control, ControlHandle, ControlKind, ControlProperty, FormHandle, ScriptContext,
};
use rhai::{Dynamic, Engine, EvalAltResult, ImmutableString, NativeCallContext, INT};
use std::sync::Arc;

type FnResult<T> = Result<T, Box<EvalAltResult>>;

/// The root automation object injected into the script scope
#[derive(Clone)]
pub struct HostHandle {
    services: Arc<HostServices>,
}

impl HostHandle {
    pub fn new(services: Arc<HostServices>) -> Self {
        Self { services }
    }
}

/// `Root.Forms`: constructors for forms and controls
#[derive(Debug, Clone, Copy, Default)]
pub struct FormsFactory;

/// Register the whole object model on an engine for one run
pub fn register(engine: &mut Engine, services: &Arc<HostServices>) {
    register_root(engine);
    register_forms_factory(engine);
    register_form(engine, services);
    register_control(engine);
    register_script_context(engine);
}

fn register_root(engine: &mut Engine) {
    engine
        .register_type_with_name::<HostHandle>("Host")
        .register_fn(
            "Echo",
            |ctx: NativeCallContext, host: &mut HostHandle, value: Dynamic| -> FnResult<()> {
                host.services.sink.echo(&display(&ctx, value)?);
                Ok(())
            },
        )
        .register_fn(
            "TraceI",
            |ctx: NativeCallContext, host: &mut HostHandle, value: Dynamic| -> FnResult<()> {
                host.services.sink.trace_info(&display(&ctx, value)?);
                Ok(())
            },
        )
        .register_fn(
            "MsgBox",
            |ctx: NativeCallContext, host: &mut HostHandle, value: Dynamic| -> FnResult<()> {
                Ok(host.services.sink.msg_box(&display(&ctx, value)?)?)
            },
        )
        .register_get("Forms", |_: &mut HostHandle| FormsFactory)
        .register_get("Script", |host: &mut HostHandle| {
            host.services.context.clone()
        });
}

/// Display form of a script value, the same text `print` would show
fn display(ctx: &NativeCallContext, value: Dynamic) -> FnResult<String> {
    if value.is_string() {
        return Ok(value.to_string());
    }
    let text = ctx.call_fn::<ImmutableString>("to_string", (value,))?;
    Ok(text.to_string())
}

fn register_forms_factory(engine: &mut Engine) {
    engine
        .register_type_with_name::<FormsFactory>("Forms")
        .register_fn("Form", |_: &mut FormsFactory| FormHandle::new())
        .register_fn("Label", |_: &mut FormsFactory| {
            ControlHandle::new(Control::label(""))
        })
        .register_fn("Label", |_: &mut FormsFactory, text: &str| {
            ControlHandle::new(Control::label(text))
        })
        .register_fn("Button", |_: &mut FormsFactory, text: &str| {
            ControlHandle::new(Control::auto_button(text))
        })
        .register_fn("Button", |_: &mut FormsFactory, text: &str, exit_code: INT| {
            ControlHandle::new(Control::button(text, exit_code))
        })
        .register_fn("TextBox", |_: &mut FormsFactory| {
            ControlHandle::new(Control::text_box(""))
        })
        .register_fn("TextBox", |_: &mut FormsFactory, text: &str| {
            ControlHandle::new(Control::text_box(text))
        });
}

fn register_form(engine: &mut Engine, services: &Arc<HostServices>) {
    let runner = services.runner.clone();
    let text = ControlProperty::Text.name();

    engine
        .register_type_with_name::<FormHandle>("Form")
        .register_get(text, |form: &mut FormHandle| form.text())
        .register_set(text, |form: &mut FormHandle, value: ImmutableString| {
            form.set_text(value.to_string())
        })
        .register_get("Count", |form: &mut FormHandle| form.len() as INT)
        .register_fn("Execute", move |form: &mut FormHandle| -> FnResult<INT> {
            Ok(runner.execute(form)?)
        })
        .register_fn("AddControl", |form: &mut FormHandle, kind: &str| {
            add_control(form, kind, &[])
        })
        .register_fn(
            "AddControl",
            |form: &mut FormHandle, kind: &str, a: Dynamic| add_control(form, kind, &[a]),
        )
        .register_fn(
            "AddControl",
            |form: &mut FormHandle, kind: &str, a: Dynamic, b: Dynamic| {
                add_control(form, kind, &[a, b])
            },
        )
        // Property syntax `form.name` falls back to these string indexers
        .register_indexer_get(
            |form: &mut FormHandle, name: ImmutableString| -> FnResult<ControlHandle> {
                Ok(form.get(&name)?)
            },
        )
        .register_indexer_set(
            |form: &mut FormHandle, name: ImmutableString, control: ControlHandle| {
                form.attach(&name, control);
            },
        );
}

fn register_control(engine: &mut Engine) {
    let text = ControlProperty::Text.name();
    let exit_code = ControlProperty::ExitCode.name();

    engine
        .register_type_with_name::<ControlHandle>("Control")
        .register_get(text, |control: &mut ControlHandle| control.text())
        .register_set(text, |control: &mut ControlHandle, value: ImmutableString| {
            control.set_text(value.to_string())
        })
        .register_get(exit_code, |control: &mut ControlHandle| -> FnResult<Dynamic> {
            // Unit until Execute fixes an automatic code to the button's ordinal
            Ok(match control.lock().exit_code()? {
                Some(code) => Dynamic::from_int(code),
                None => Dynamic::UNIT,
            })
        })
        .register_set(exit_code, |control: &mut ControlHandle, value: INT| -> FnResult<()> {
            Ok(control.lock().set_exit_code(value)?)
        })
        .register_get("Kind", |control: &mut ControlHandle| {
            control.kind().name().to_string()
        })
        .register_fn("to_string", |control: &mut ControlHandle| {
            format!("{}({:?})", control.kind(), control.text())
        });
}

fn register_script_context(engine: &mut Engine) {
    engine
        .register_type_with_name::<ScriptContext>("Script")
        .register_get("Name", |context: &mut ScriptContext| {
            context.name().to_string()
        })
        .register_get("Path", |context: &mut ScriptContext| {
            context.path().display().to_string()
        });
}

fn add_control(form: &mut FormHandle, kind: &str, args: &[Dynamic]) -> FnResult<ControlHandle> {
    let control = build_control(kind, args)?;
    Ok(form.add(ControlHandle::new(control)))
}

/// Build a control from a kind name and constructor arguments.
///
/// Unknown kinds and unusable arguments fail here, before the form runs.
pub fn build_control(kind: &str, args: &[Dynamic]) -> HostResult<Control> {
    let kind: ControlKind = kind.parse()?;
    let invalid = |reason: String| HostError::InvalidArguments {
        kind: kind.name().to_string(),
        reason,
    };

    let max_args = match kind {
        ControlKind::Button => 2,
        ControlKind::Label | ControlKind::TextBox => 1,
    };
    if args.len() > max_args {
        return Err(invalid(format!(
            "expected at most {max_args} arguments, got {}",
            args.len()
        )));
    }

    let text = match args.first() {
        Some(value) => value
            .clone()
            .into_string()
            .map_err(|actual| invalid(format!("text must be a string, got {actual}")))?,
        None => String::new(),
    };

    Ok(match kind {
        ControlKind::Label => Control::label(text),
        ControlKind::TextBox => Control::text_box(text),
        ControlKind::Button => match args.get(1) {
            Some(value) => {
                let code = value
                    .as_int()
                    .map_err(|actual| invalid(format!("exit code must be an integer, got {actual}")))?;
                Control::button(text, code)
            }
            None => Control::auto_button(text),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_label_without_args() {
        assert_eq!(build_control("Label", &[]).unwrap(), Control::label(""));
    }

    #[test]
    fn test_build_button_with_code() {
        let args = [Dynamic::from("Exit"), Dynamic::from_int(2)];
        assert_eq!(
            build_control("Button", &args).unwrap(),
            Control::button("Exit", 2)
        );
    }

    #[test]
    fn test_build_button_without_code_is_automatic() {
        let args = [Dynamic::from("OK")];
        assert_eq!(
            build_control("button", &args).unwrap(),
            Control::auto_button("OK")
        );
    }

    #[test]
    fn test_build_unknown_kind_fails() {
        assert!(matches!(
            build_control("ListBox", &[]),
            Err(HostError::InvalidControlKind(_))
        ));
    }

    #[test]
    fn test_build_rejects_non_string_text() {
        let args = [Dynamic::from_int(5)];
        assert!(matches!(
            build_control("TextBox", &args),
            Err(HostError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_build_rejects_non_integer_code() {
        let args = [Dynamic::from("Exit"), Dynamic::from("two")];
        assert!(matches!(
            build_control("Button", &args),
            Err(HostError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_build_rejects_extra_args() {
        let args = [Dynamic::from("a"), Dynamic::from("b")];
        let err = build_control("Label", &args).unwrap_err();
        assert!(err.to_string().contains("at most 1"));
    }
}
