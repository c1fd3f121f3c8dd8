use soroban_sdk::{testutils::Address as _, vec, Address, Env};
use welcash_token::{WelcashToken, WelcashTokenClient};

use crate::{TwoKeyController, TwoKeyControllerClient};

pub struct Deployment {
    pub env: Env,
    pub token: WelcashTokenClient<'static>,
    pub controller: TwoKeyControllerClient<'static>,
    pub deployer: Address,
    pub s0: Address,
    pub s1: Address,
}

/// Token first, then the controller bound to it, then ownership handed from
/// the deployer to the controller.
pub fn deploy() -> Deployment {
    let env = Env::default();
    env.mock_all_auths();

    let deployer = Address::generate(&env);
    let token_id = env.register(WelcashToken, ());
    let token = WelcashTokenClient::new(&env, &token_id);
    token.initialize(&deployer);

    let s0 = Address::generate(&env);
    let s1 = Address::generate(&env);
    let controller_id = env.register(TwoKeyController, ());
    let controller = TwoKeyControllerClient::new(&env, &controller_id);
    controller.init(&token_id, &vec![&env, s0.clone(), s1.clone()]);

    token.transfer_ownership(&deployer, &controller_id);

    Deployment {
        env,
        token,
        controller,
        deployer,
        s0,
        s1,
    }
}
