use wlankey_core::{Profile, SecretResolution};
use wlankey_netsh::query::{list_profiles_args, show_profile_args};
use wlankey_netsh::testing::ScriptedCommandExecutor;
use wlankey_netsh::{collect_entries, NetshClient, ProfileSelection, ProfileSource};

fn show_args(name: &str) -> Vec<String> {
    show_profile_args(&Profile::new(name).unwrap()).into_inner()
}

#[tokio::test]
async fn home_and_cafe_profiles_resolve_in_order() {
    let executor = ScriptedCommandExecutor::new();
    executor.add_simple_response(
        "netsh",
        &list_profiles_args().into_inner(),
        "    All User Profile     : HomeWifi\n    All User Profile     : CafeOpen\n",
    );
    executor.add_simple_response(
        "netsh",
        &show_args("HomeWifi"),
        "    Security key           : Present\n    Key Content : s3cr3t\n",
    );
    executor.add_simple_response(
        "netsh",
        &show_args("CafeOpen"),
        "    Security key  : Absent\n",
    );

    let client = NetshClient::new("netsh", Box::new(executor.clone()));
    let entries = collect_entries(&client, &client, &ProfileSelection::All).await;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].profile.name(), "HomeWifi");
    assert_eq!(
        entries[0].resolution,
        SecretResolution::Resolved {
            secret: "s3cr3t".to_string()
        }
    );
    assert_eq!(entries[1].profile.name(), "CafeOpen");
    assert_eq!(entries[1].resolution, SecretResolution::OpenNetwork);

    // one listing query, then one query per profile
    assert_eq!(
        executor.calls(),
        vec![
            "netsh wlan show profiles".to_string(),
            "netsh wlan show profile name=HomeWifi key=clear".to_string(),
            "netsh wlan show profile name=CafeOpen key=clear".to_string(),
        ]
    );
}

#[tokio::test]
async fn failing_profile_is_recorded_and_the_rest_still_resolve() {
    let executor = ScriptedCommandExecutor::new();
    executor.add_simple_response(
        "netsh",
        &list_profiles_args().into_inner(),
        "    All User Profile     : Locked\n    All User Profile     : Gone\n    All User Profile     : Hidden\n",
    );
    executor.add_simple_response(
        "netsh",
        &show_args("Locked"),
        "    Authentication         : WPA2-Personal\n    Security key           : Present\n",
    );
    executor.add_error_response("netsh", &show_args("Gone"), "Profile \"Gone\" is not found on the system.");
    executor.add_simple_response("netsh", &show_args("Hidden"), "    Key Content            :   \n");

    let client = NetshClient::new("netsh", Box::new(executor));
    let entries = collect_entries(&client, &client, &ProfileSelection::All).await;

    assert_eq!(entries[0].resolution, SecretResolution::Inaccessible);
    assert_eq!(entries[0].authentication.as_deref(), Some("WPA2-Personal"));
    assert!(entries[1].resolution.is_failure());
    assert_eq!(entries[2].resolution, SecretResolution::SecretHiddenEmpty);
}

#[tokio::test]
async fn missing_utility_yields_no_profiles() {
    let executor = ScriptedCommandExecutor::new();
    executor.add_launch_failure("netsh", &list_profiles_args().into_inner(), "program not found");

    let client = NetshClient::new("netsh", Box::new(executor.clone()));
    assert!(client.enumerate_profiles().await.is_empty());
    assert_eq!(executor.calls().len(), 1);
}
