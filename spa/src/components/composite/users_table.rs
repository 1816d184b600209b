use shared::User;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub users: Vec<User>,
}

#[function_component(UsersTable)]
pub fn users_table(props: &Props) -> Html {
    let content = if props.users.is_empty() {
        html! {
            <tr>
                <td colspan="3" class="text-center text-muted">{"No data found"}</td>
            </tr>
        }
    } else {
        let rows = props.users.iter().map(|user| {
            html! {
                <tr key={user.id}>
                    <td>{user.id.to_string()}</td>
                    <td>{format!("{} {}", user.first_name, user.last_name)}</td>
                    <td>{&user.email}</td>
                </tr>
            }
        });
        rows.collect::<Html>()
    };

    html! {
        <table class="table table-striped table-hover">
            <thead>
              <tr>
                <th>{"ID"}</th>
                <th>{"User"}</th>
                <th>{"Email"}</th>
              </tr>
            </thead>
            <tbody>
                {content}
            </tbody>
        </table>
    }
}
