use crate::controllers::AboutViewModel;
use crate::models::profile::Profile;


pub fn to_about(model: &Profile) -> AboutViewModel {
    AboutViewModel {
        name: model.name.clone().unwrap_or_default(),
        bio: model.bio.clone().unwrap_or_default(),
    }
}
