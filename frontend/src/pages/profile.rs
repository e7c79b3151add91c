use shared::{HostUser, VisualContext};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub user: Option<HostUser>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let visual = use_context::<VisualContext>().unwrap_or_default();
    let hint_style = visual
        .hint
        .as_ref()
        .map(|hint| format!("color: {};", hint))
        .unwrap_or_default();

    html! {
        <div class="page profile-page">
            <h1 class="page-title">{"Profile"}</h1>
            {match &props.user {
                Some(user) => html! {
                    <dl class="profile-details">
                        <dt style={hint_style.clone()}>{"Name"}</dt>
                        <dd>{user.display_name()}</dd>
                        {if let Some(username) = &user.username {
                            html! {
                                <>
                                    <dt style={hint_style.clone()}>{"Username"}</dt>
                                    <dd>{format!("@{}", username)}</dd>
                                </>
                            }
                        } else { html! {} }}
                        {if let Some(language) = &user.language_code {
                            html! {
                                <>
                                    <dt style={hint_style.clone()}>{"Language"}</dt>
                                    <dd>{language}</dd>
                                </>
                            }
                        } else { html! {} }}
                        <dt style={hint_style.clone()}>{"Telegram ID"}</dt>
                        <dd>{user.id.to_string()}</dd>
                    </dl>
                },
                None => html! {
                    <div class="empty-state">
                        <i class="fas fa-user empty-icon"></i>
                        <p style={hint_style.clone()}>{"Open this app from Telegram to see your profile"}</p>
                    </div>
                },
            }}
        </div>
    }
}
