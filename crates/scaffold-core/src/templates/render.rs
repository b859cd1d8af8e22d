//! Dart source renderers, one per generated file
//!
//! Each function is pure: the same [`TemplateInfo`] always renders to the same
//! text. The files reference each other through fixed relative imports
//! (`action.dart`, `state.dart`, ...) and are written side by side.

use super::entries::NamedEntry;
use super::info::TemplateInfo;
use crate::naming::distinct_camel_case;

const FISH_REDUX_IMPORT: &str = "import 'package:fish_redux/fish_redux.dart';\n";
const MATERIAL_IMPORT: &str = "import 'package:flutter/material.dart' hide Action;\n";
const LOCAL_IMPORTS: &str = "import 'action.dart';\nimport 'state.dart';\n";

/// Name of the local variable holding an action's payload
fn payload_name(ty: &str) -> String {
    distinct_camel_case(ty)
}

/// `final Type name = action.payload;` for actions that carry one
fn payload_unpack(action: &NamedEntry) -> String {
    match &action.ty {
        Some(ty) => format!("  final {} {} = action.payload;\n", ty, payload_name(ty)),
        None => String::new(),
    }
}

/// `action.dart`: the action enum and its creator
pub fn action(info: &TemplateInfo) -> String {
    let cap = info.capitalized();
    let members: Vec<&str> = info.actions.iter().map(|a| a.name.as_str()).collect();

    let mut out = String::from(FISH_REDUX_IMPORT);
    out.push('\n');
    if members.is_empty() {
        out.push_str(&format!("enum {}Action {{}}\n", cap));
    } else {
        out.push_str(&format!("enum {}Action {{ {} }}\n", cap, members.join(", ")));
    }
    out.push('\n');

    out.push_str(&format!("class {}ActionCreator {{\n", cap));
    let creators: Vec<String> = info
        .actions
        .iter()
        .map(|action| match &action.ty {
            Some(ty) => {
                let arg = payload_name(ty);
                format!(
                    "  static Action {name}Action({ty} {arg}) {{\n    \
                     return Action({cap}Action.{name}, payload: {arg});\n  \
                     }}\n",
                    name = action.name,
                    ty = ty,
                    arg = arg,
                    cap = cap,
                )
            }
            None => format!(
                "  static Action {name}Action() {{\n    \
                 return const Action({cap}Action.{name});\n  \
                 }}\n",
                name = action.name,
                cap = cap,
            ),
        })
        .collect();
    out.push_str(&creators.join("\n"));
    out.push_str("}\n");
    out
}

/// `state.dart`: the state class, clone/toString, and the `initState` hook
pub fn state(info: &TemplateInfo) -> String {
    let cap = info.capitalized();
    let props = &info.state_properties;

    let mut out = String::from(FISH_REDUX_IMPORT);
    out.push_str(MATERIAL_IMPORT);
    out.push('\n');

    out.push_str(&format!(
        "class {cap}State implements Cloneable<{cap}State> {{\n",
        cap = cap
    ));
    for prop in props {
        out.push_str(&format!("  {} {};\n", prop.type_or_dynamic(), prop.name));
    }
    if !props.is_empty() {
        out.push('\n');
    }

    let params: Vec<String> = props.iter().map(|p| format!("this.{}", p.name)).collect();
    if params.is_empty() {
        out.push_str(&format!("  {}State();\n", cap));
    } else {
        out.push_str(&format!("  {}State({{{}}});\n", cap, params.join(", ")));
    }
    out.push('\n');

    out.push_str("  @override\n");
    out.push_str(&format!("  {cap}State clone() {{\n    return {cap}State()", cap = cap));
    for prop in props {
        out.push_str(&format!("\n      ..{name} = {name}", name = prop.name));
    }
    out.push_str(";\n  }\n\n");

    let fields: Vec<String> = props
        .iter()
        .map(|p| format!("{name}: ${name}", name = p.name))
        .collect();
    out.push_str("  @override\n");
    out.push_str("  String toString() {\n");
    out.push_str(&format!(
        "    return '{}State{{{}}}';\n",
        cap,
        fields.join(", ")
    ));
    out.push_str("  }\n");
    out.push_str("}\n\n");

    out.push_str(&format!(
        "{cap}State initState({cap}State state) {{\n  return state;\n}}\n",
        cap = cap
    ));
    out
}

/// `reducer.dart`: the action-to-reducer table and one reducer per action
pub fn reducer(info: &TemplateInfo) -> String {
    let cap = info.capitalized();

    let mut out = String::from(FISH_REDUX_IMPORT);
    out.push('\n');
    out.push_str(LOCAL_IMPORTS);
    out.push('\n');

    out.push_str(&format!("Reducer<{}State> buildReducer() {{\n", cap));
    out.push_str(&format!(
        "  return asReducer(<Object, Reducer<{}State>>{{\n",
        cap
    ));
    for action in &info.actions {
        out.push_str(&format!(
            "    {cap}Action.{name}: _{name}Reducer,\n",
            cap = cap,
            name = action.name
        ));
    }
    out.push_str("  });\n}\n");

    for action in &info.actions {
        out.push('\n');
        out.push_str(&format!(
            "{cap}State _{name}Reducer({cap}State state, Action action) {{\n",
            cap = cap,
            name = action.name
        ));
        out.push_str(&payload_unpack(action));
        out.push_str("  // TODO: apply the action to a copy of the state\n");
        out.push_str("  return state.clone();\n}\n");
    }
    out
}

/// `effect.dart`: the action-to-effect table and one empty handler per action
pub fn effect(info: &TemplateInfo) -> String {
    let cap = info.capitalized();

    let mut out = String::from(FISH_REDUX_IMPORT);
    out.push_str(MATERIAL_IMPORT);
    out.push('\n');
    out.push_str(LOCAL_IMPORTS);
    out.push('\n');

    out.push_str(&format!("Effect<{}State> buildEffect() {{\n", cap));
    out.push_str(&format!(
        "  return combineEffects(<Object, Effect<{}State>>{{\n",
        cap
    ));
    for action in &info.actions {
        out.push_str(&format!(
            "    {cap}Action.{name}: _{name},\n",
            cap = cap,
            name = action.name
        ));
    }
    out.push_str("  });\n}\n");

    for action in &info.actions {
        out.push('\n');
        out.push_str(&format!(
            "void _{name}(Action action, Context<{cap}State> ctx) {{\n",
            cap = cap,
            name = action.name
        ));
        out.push_str(&payload_unpack(action));
        out.push_str("  // TODO: handle the side effect\n}\n");
    }
    out
}

/// `view.dart`: a scaffold titled with the component name
pub fn view(info: &TemplateInfo) -> String {
    let cap = info.capitalized();

    let mut out = String::from(FISH_REDUX_IMPORT);
    out.push_str(MATERIAL_IMPORT);
    out.push('\n');
    out.push_str(LOCAL_IMPORTS);
    out.push('\n');
    out.push_str(&format!(
        "Widget buildView({}State state, Dispatch dispatch, ViewService viewService) {{\n",
        cap
    ));
    out.push_str("  return Scaffold(\n");
    out.push_str("    appBar: AppBar(\n");
    out.push_str(&format!("      title: const Text('{}'),\n", info.name));
    out.push_str("    ),\n");
    out.push_str("    body: Container(\n");
    out.push_str("      // TODO: build the view\n");
    out.push_str("    ),\n");
    out.push_str("  );\n");
    out.push_str("}\n");
    out
}

/// `page.dart`: the page wiring initState, effect, reducer and view together
pub fn page(info: &TemplateInfo) -> String {
    let cap = info.capitalized();

    let mut out = String::from(FISH_REDUX_IMPORT);
    out.push('\n');
    for stem in ["effect", "reducer", "state", "view"] {
        out.push_str(&format!("import '{}.dart';\n", stem));
    }
    out.push('\n');
    out.push_str(&format!(
        "class {cap}Page extends Page<{cap}State, {cap}State> {{\n",
        cap = cap
    ));
    out.push_str(&format!("  {}Page()\n", cap));
    out.push_str("      : super(\n");
    out.push_str("          initState: initState,\n");
    out.push_str("          effect: buildEffect(),\n");
    out.push_str("          reducer: buildReducer(),\n");
    out.push_str("          view: buildView,\n");
    out.push_str(&format!(
        "          // dependencies: Dependencies<{}State>(\n",
        cap
    ));
    out.push_str("          //     adapter: null,\n");
    out.push_str(&format!(
        "          //     slots: <String, Dependent<{}State>>{{\n",
        cap
    ));
    out.push_str("          //     }),\n");
    out.push_str(&format!(
        "          // middleware: <Middleware<{}State>>[\n",
        cap
    ));
    out.push_str(&format!(
        "          //   logMiddleware(tag: '{}Page'),\n",
        cap
    ));
    out.push_str("          // ],\n");
    out.push_str("        );\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> TemplateInfo {
        TemplateInfo::parse("counter", "increment, addBy: Int", "count: Int")
    }

    #[test]
    fn test_action_enum_and_creators() {
        let out = action(&counter());
        assert!(out.contains("enum CounterAction { increment, addBy }"));
        assert!(out.contains("class CounterActionCreator {"));
        assert!(out.contains("static Action incrementAction() {"));
        assert!(out.contains("return const Action(CounterAction.increment);"));
        assert!(out.contains("static Action addByAction( Int int) {"));
        assert!(out.contains("return Action(CounterAction.addBy, payload: int);"));
    }

    #[test]
    fn test_action_exact_layout() {
        let info = TemplateInfo::parse("todo_list", "clear, add:Item", "");
        let expected = "import 'package:fish_redux/fish_redux.dart';

enum TodoListAction { clear, add }

class TodoListActionCreator {
  static Action clearAction() {
    return const Action(TodoListAction.clear);
  }

  static Action addAction(Item item) {
    return Action(TodoListAction.add, payload: item);
  }
}
";
        assert_eq!(action(&info), expected);
    }

    #[test]
    fn test_action_payload_name_is_distinct_from_type() {
        let info = TemplateInfo::parse("cart", "add:item", "");
        assert!(action(&info).contains("static Action addAction(item _item) {"));
    }

    #[test]
    fn test_action_without_actions() {
        let info = TemplateInfo::parse("empty", "", "");
        let out = action(&info);
        assert!(out.contains("enum EmptyAction {}"));
        assert!(out.contains("class EmptyActionCreator {\n}\n"));
    }

    #[test]
    fn test_action_keeps_duplicates() {
        let info = TemplateInfo::parse("dup", "reset, reset", "");
        assert!(action(&info).contains("enum DupAction { reset, reset }"));
    }

    #[test]
    fn test_state_exact_layout() {
        let info = TemplateInfo::parse("todo_list", "", "title:String, payload");
        let expected = "import 'package:fish_redux/fish_redux.dart';
import 'package:flutter/material.dart' hide Action;

class TodoListState implements Cloneable<TodoListState> {
  String title;
  dynamic payload;

  TodoListState({this.title, this.payload});

  @override
  TodoListState clone() {
    return TodoListState()
      ..title = title
      ..payload = payload;
  }

  @override
  String toString() {
    return 'TodoListState{title: $title, payload: $payload}';
  }
}

TodoListState initState(TodoListState state) {
  return state;
}
";
        assert_eq!(state(&info), expected);
    }

    #[test]
    fn test_state_without_properties() {
        let info = TemplateInfo::parse("empty", "", "");
        let out = state(&info);
        assert!(out.contains("  EmptyState();\n"));
        assert!(out.contains("return EmptyState();"));
        assert!(out.contains("return 'EmptyState{}';"));
    }

    #[test]
    fn test_reducer_table_and_handlers() {
        let out = reducer(&counter());
        assert!(out.contains("Reducer<CounterState> buildReducer() {"));
        assert!(out.contains("return asReducer(<Object, Reducer<CounterState>>{"));
        assert!(out.contains("    CounterAction.increment: _incrementReducer,\n"));
        assert!(out.contains("    CounterAction.addBy: _addByReducer,\n"));
        assert_eq!(out.matches("CounterAction.").count(), 2);
        assert!(out.contains("CounterState _incrementReducer(CounterState state, Action action) {"));
        assert!(out.contains("  final  Int int = action.payload;\n"));
        assert_eq!(out.matches("return state.clone();").count(), 2);
        assert!(out.contains("import 'action.dart';"));
        assert!(out.contains("import 'state.dart';"));
    }

    #[test]
    fn test_effect_table_and_handlers() {
        let out = effect(&counter());
        assert!(out.contains("Effect<CounterState> buildEffect() {"));
        assert!(out.contains("return combineEffects(<Object, Effect<CounterState>>{"));
        assert!(out.contains("    CounterAction.increment: _increment,\n"));
        assert!(out.contains("    CounterAction.addBy: _addBy,\n"));
        assert_eq!(out.matches("CounterAction.").count(), 2);
        assert!(out.contains("void _increment(Action action, Context<CounterState> ctx) {"));
        assert!(out.contains("void _addBy(Action action, Context<CounterState> ctx) {\n  final  Int int = action.payload;\n"));
    }

    #[test]
    fn test_view_uses_raw_name() {
        let info = TemplateInfo::parse("todo_list", "", "");
        let out = view(&info);
        assert!(out.contains(
            "Widget buildView(TodoListState state, Dispatch dispatch, ViewService viewService) {"
        ));
        assert!(out.contains("title: const Text('todo_list'),"));
    }

    #[test]
    fn test_page_wires_everything() {
        let out = page(&counter());
        assert!(out.contains("class CounterPage extends Page<CounterState, CounterState> {"));
        assert!(out.contains("initState: initState,"));
        assert!(out.contains("effect: buildEffect(),"));
        assert!(out.contains("reducer: buildReducer(),"));
        assert!(out.contains("view: buildView,"));
        assert!(out.contains("// middleware: <Middleware<CounterState>>["));
        assert!(out.contains("//   logMiddleware(tag: 'CounterPage'),"));
        for stem in ["effect", "reducer", "state", "view"] {
            assert!(out.contains(&format!("import '{}.dart';", stem)));
        }
    }
}
