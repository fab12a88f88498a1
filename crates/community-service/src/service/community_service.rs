//! 社区查询服务
//!
//! 聚合社区、成员、徽章、用户徽章仓储，向 HTTP 层提供组装好的 DTO。
//! 同一社区地址可能存在多个索引版本，所有对外列表只暴露最新版本。

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use super::observed;
use crate::dto::{
    CommunityBadgeDto, CommunityBadgesDto, CommunityDto, JoinedCommunityDto, MemberDto,
    UserBadgeDto, UserBadgeStats,
};
use crate::error::{AppError, Result};
use crate::models::{Community, latest_per_address};
use crate::repository::{
    BadgeRepositoryTrait, CommunityRepositoryTrait, MemberRepositoryTrait,
    UserBadgeRepositoryTrait,
};
use community_shared::observability::metrics;

/// 社区查询服务
#[derive(Clone)]
pub struct CommunityService {
    community_repo: Arc<dyn CommunityRepositoryTrait>,
    member_repo: Arc<dyn MemberRepositoryTrait>,
    badge_repo: Arc<dyn BadgeRepositoryTrait>,
    user_badge_repo: Arc<dyn UserBadgeRepositoryTrait>,
}

impl CommunityService {
    pub fn new(
        community_repo: Arc<dyn CommunityRepositoryTrait>,
        member_repo: Arc<dyn MemberRepositoryTrait>,
        badge_repo: Arc<dyn BadgeRepositoryTrait>,
        user_badge_repo: Arc<dyn UserBadgeRepositoryTrait>,
    ) -> Self {
        Self {
            community_repo,
            member_repo,
            badge_repo,
            user_badge_repo,
        }
    }

    /// 获取所有可见社区
    ///
    /// 每个社区地址只保留最新版本，并补充成员数、管理员列表和当前用户的加入状态
    #[instrument(skip(self))]
    pub async fn find_all(&self, user_address: Option<&str>) -> Result<Vec<CommunityDto>> {
        observed("find_all", async {
            let rows = self.community_repo.list_visible().await?;
            let communities = latest_per_address(rows);

            debug!(count = communities.len(), "Visible communities loaded");

            try_join_all(
                communities
                    .into_iter()
                    .map(|community| self.enrich(community, user_address)),
            )
            .await
        })
        .await
    }

    /// 获取单个社区详情（最新版本）
    #[instrument(skip(self))]
    pub async fn find_one(
        &self,
        community_address: &str,
        user_address: Option<&str>,
    ) -> Result<CommunityDto> {
        observed("find_one", async {
            let rows = self.community_repo.find_by_address(community_address).await?;
            let community = latest_per_address(rows)
                .into_iter()
                .next()
                .ok_or_else(|| AppError::CommunityNotFound(community_address.to_string()))?;

            self.enrich(community, user_address).await
        })
        .await
    }

    /// 更新社区可见性，返回更新后的社区详情
    ///
    /// 该地址下所有版本一并更新；无记录被更新时返回 404
    #[instrument(skip(self))]
    pub async fn update_visibility(
        &self,
        community_address: &str,
        is_hidden: bool,
    ) -> Result<CommunityDto> {
        observed("update_visibility", async {
            let affected = match self
                .community_repo
                .set_hidden(community_address, is_hidden)
                .await
            {
                Ok(affected) => affected,
                Err(AppError::Database(sqlx::Error::RowNotFound)) => 0,
                Err(e) => return Err(e),
            };

            if affected == 0 {
                return Err(AppError::CommunityNotFound(community_address.to_string()));
            }

            metrics::record_visibility_update(is_hidden);
            info!(
                community_address = %community_address,
                is_hidden,
                affected,
                "Community visibility updated"
            );

            self.find_one(community_address, None).await
        })
        .await
    }

    /// 获取社区成员，按积分降序
    #[instrument(skip(self))]
    pub async fn find_members(&self, community_address: &str) -> Result<Vec<MemberDto>> {
        observed("find_members", async {
            let members = self.member_repo.list_by_community(community_address).await?;

            if members.is_empty() {
                return Err(AppError::MembersNotFound(community_address.to_string()));
            }

            Ok(members.into_iter().map(MemberDto::from).collect())
        })
        .await
    }

    /// 获取社区徽章
    ///
    /// 提供用户地址时额外返回该用户的徽章数量、积分，以及每个徽章的持有状态
    #[instrument(skip(self))]
    pub async fn find_badges(
        &self,
        community_address: &str,
        user_address: Option<&str>,
    ) -> Result<CommunityBadgesDto> {
        observed("find_badges", async {
            let badges = self.badge_repo.list_by_community(community_address).await?;

            if badges.is_empty() {
                return Err(AppError::CommunityBadgesNotFound(
                    community_address.to_string(),
                ));
            }

            let total_badges = badges.len();

            let Some(user_address) = user_address else {
                return Ok(CommunityBadgesDto {
                    badges_count: None,
                    users_points: None,
                    total_badges,
                    community_badges: badges.into_iter().map(CommunityBadgeDto::from).collect(),
                });
            };

            let user_badges = self
                .user_badge_repo
                .list_by_user_and_community(user_address, community_address)
                .await?;
            let points = self
                .member_repo
                .points_for(user_address, community_address)
                .await?
                .unwrap_or(0);

            let community_badges = badges
                .into_iter()
                .map(|badge| {
                    let user_has = user_badges.iter().any(|ub| ub.matches(&badge));
                    CommunityBadgeDto {
                        user_has: Some(user_has),
                        ..CommunityBadgeDto::from(badge)
                    }
                })
                .collect();

            Ok(CommunityBadgesDto {
                badges_count: Some(user_badges.len() as i64),
                users_points: Some(points),
                total_badges,
                community_badges,
            })
        })
        .await
    }

    /// 获取用户创建的社区
    #[instrument(skip(self))]
    pub async fn find_created_communities(&self, user_address: &str) -> Result<Vec<Community>> {
        observed("find_created_communities", async {
            let rows = self.community_repo.list_by_creator(user_address).await?;
            Ok(latest_per_address(rows))
        })
        .await
    }

    /// 获取用户创建且已隐藏的社区
    #[instrument(skip(self))]
    pub async fn find_hidden_communities(&self, user_address: &str) -> Result<Vec<Community>> {
        observed("find_hidden_communities", async {
            let rows = self
                .community_repo
                .list_hidden_by_creator(user_address)
                .await?;
            Ok(latest_per_address(rows))
        })
        .await
    }

    /// 获取用户已加入的社区，附带用户在各社区的徽章数量与积分
    #[instrument(skip(self))]
    pub async fn find_joined_communities(
        &self,
        user_address: &str,
    ) -> Result<Vec<JoinedCommunityDto>> {
        observed("find_joined_communities", async {
            let memberships = self
                .member_repo
                .list_community_addresses_for_user(user_address)
                .await?;

            // 同一社区可能存在多条成员记录
            let mut seen = HashSet::new();
            let addresses: Vec<String> = memberships
                .into_iter()
                .filter(|addr| seen.insert(addr.clone()))
                .collect();

            let stats = try_join_all(addresses.iter().map(|addr| async move {
                let stats = self.user_badge_stats(user_address, addr).await?;
                Ok::<_, AppError>((addr.clone(), stats))
            }))
            .await?;
            let stats: HashMap<String, UserBadgeStats> = stats.into_iter().collect();

            let rows = self.community_repo.list_by_addresses(&addresses).await?;

            Ok(latest_per_address(rows)
                .into_iter()
                .map(|community| {
                    let user_stats = stats
                        .get(&community.community_address)
                        .copied()
                        .unwrap_or_default();
                    JoinedCommunityDto {
                        community,
                        users_badges_count: user_stats.badges_count,
                        users_points: user_stats.points,
                    }
                })
                .collect())
        })
        .await
    }

    /// 获取用户持有的所有徽章
    #[instrument(skip(self))]
    pub async fn find_user_badges(&self, user_address: &str) -> Result<Vec<UserBadgeDto>> {
        observed("find_user_badges", async {
            let badges = self.user_badge_repo.list_by_user(user_address).await?;

            if badges.is_empty() {
                return Err(AppError::UserBadgesNotFound(user_address.to_string()));
            }

            Ok(badges.into_iter().map(UserBadgeDto::from).collect())
        })
        .await
    }

    /// 用户在某社区持有的徽章数量与积分
    ///
    /// 积分取最新索引的成员记录，非成员为 0
    pub async fn user_badge_stats(
        &self,
        user_address: &str,
        community_address: &str,
    ) -> Result<UserBadgeStats> {
        let badges = self
            .user_badge_repo
            .list_by_user_and_community(user_address, community_address)
            .await?;
        let points = self
            .member_repo
            .points_for(user_address, community_address)
            .await?
            .unwrap_or(0);

        Ok(UserBadgeStats {
            badges_count: badges.len() as i64,
            points,
        })
    }

    /// 补充成员数、管理员列表和加入状态
    async fn enrich(
        &self,
        community: Community,
        user_address: Option<&str>,
    ) -> Result<CommunityDto> {
        let address = community.community_address.as_str();

        let total_members = self.member_repo.count_by_community(address).await?;
        let managers = self.member_repo.list_manager_addresses(address).await?;
        let is_joined = match user_address {
            Some(user) => self.member_repo.is_member(address, user).await?,
            None => false,
        };

        Ok(CommunityDto::from_parts(
            community,
            total_members,
            managers,
            is_joined,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Badge, CommunityMember, UserBadge};
    use crate::repository::{
        MockBadgeRepositoryTrait, MockCommunityRepositoryTrait, MockMemberRepositoryTrait,
        MockUserBadgeRepositoryTrait,
    };
    use mockall::predicate::eq;

    const COMMUNITY_ADDRESS: &str =
        "CB5DQK6DDWRJHPWJHYPQGFK4F4K7YZHX7IHT6I4ICO4PVIFQB4RQAAAAAAAAAAAAAAAA";
    const USER_ADDRESS: &str = "TEST_USER_ADDRESS";

    fn community(address: &str, last_indexed_at: i64, name: &str) -> Community {
        Community {
            id: format!("{address}-{last_indexed_at}"),
            community_address: address.to_string(),
            factory_address: Some(
                "CCYDNAOVWSHZUHDMXBPXKPOHQW4FH44P26NGVFAYUNPWPUNWPSXAPBAAAAAAAAAAAAAAA".into(),
            ),
            name: name.to_string(),
            description: Some("Test Description".to_string()),
            icon: Some("https://example.com/icon.png".to_string()),
            creator_address: "GBVNNPOFVV2YNXSQXDJPBVQYY7WJLHGPMLXZLHBZ3Y6HLKXQGFBPBZRY".into(),
            is_hidden: false,
            blocktimestamp: 1_625_097_600_000,
            total_badges: 10,
            last_indexed_at,
        }
    }

    fn member(user: &str, points: i32, is_manager: bool) -> CommunityMember {
        CommunityMember {
            id: format!("member-{user}"),
            user_address: user.to_string(),
            community_address: COMMUNITY_ADDRESS.to_string(),
            is_manager,
            is_creator: is_manager,
            points,
            last_indexed_at: 1_625_097_600_000,
        }
    }

    fn badge(issuer: &str, name: &str, score: i32, badge_type: &str) -> Badge {
        Badge {
            id: format!("{issuer}-{name}"),
            issuer: issuer.to_string(),
            community_address: COMMUNITY_ADDRESS.to_string(),
            name: name.to_string(),
            score,
            badge_type: badge_type.to_string(),
            created_at: None,
            removed_at: None,
        }
    }

    fn user_badge(issuer: &str, name: &str) -> UserBadge {
        UserBadge {
            id: format!("ub-{issuer}-{name}"),
            user_address: USER_ADDRESS.to_string(),
            issuer: issuer.to_string(),
            community_address: COMMUNITY_ADDRESS.to_string(),
            name: name.to_string(),
            created_at: None,
            badge_id: Some("badge-id-1".to_string()),
            community_id: Some("community-id-1".to_string()),
            community_member_id: Some("community-member-id-1".to_string()),
        }
    }

    struct Mocks {
        community: MockCommunityRepositoryTrait,
        member: MockMemberRepositoryTrait,
        badge: MockBadgeRepositoryTrait,
        user_badge: MockUserBadgeRepositoryTrait,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                community: MockCommunityRepositoryTrait::new(),
                member: MockMemberRepositoryTrait::new(),
                badge: MockBadgeRepositoryTrait::new(),
                user_badge: MockUserBadgeRepositoryTrait::new(),
            }
        }

        /// 每个社区 5 名成员、2 名管理员
        fn with_member_stats(mut self) -> Self {
            self.member
                .expect_count_by_community()
                .returning(|_| Ok(5));
            self.member
                .expect_list_manager_addresses()
                .returning(|_| Ok(vec!["manager_1".to_string(), "manager_2".to_string()]));
            self
        }

        fn into_service(self) -> CommunityService {
            CommunityService::new(
                Arc::new(self.community),
                Arc::new(self.member),
                Arc::new(self.badge),
                Arc::new(self.user_badge),
            )
        }
    }

    // ---- find_all ----

    #[tokio::test]
    async fn test_find_all_returns_transformed_data() {
        let mut mocks = Mocks::new().with_member_stats();
        mocks
            .community
            .expect_list_visible()
            .times(1)
            .returning(|| Ok(vec![community(COMMUNITY_ADDRESS, 1000, "Test Community")]));
        let service = mocks.into_service();

        let result = service.find_all(None).await.unwrap();

        assert_eq!(result.len(), 1);
        let dto = &result[0];
        assert_eq!(dto.community_address, COMMUNITY_ADDRESS);
        assert_eq!(dto.name, "Test Community");
        assert_eq!(dto.description, "Test Description");
        assert_eq!(dto.total_badges, 10);
        assert_eq!(dto.total_members, 5);
        assert_eq!(dto.managers, vec!["manager_1", "manager_2"]);
        assert!(!dto.is_joined);
    }

    #[tokio::test]
    async fn test_find_all_keeps_latest_version() {
        let mut mocks = Mocks::new().with_member_stats();
        mocks.community.expect_list_visible().returning(|| {
            Ok(vec![
                community("community1", 1000, "Old Version"),
                community("community1", 2000, "New Version"),
                community("community2", 1500, "Another Community"),
            ])
        });
        let service = mocks.into_service();

        let result = service.find_all(None).await.unwrap();

        assert_eq!(result.len(), 2);
        let c1 = result
            .iter()
            .find(|c| c.community_address == "community1")
            .unwrap();
        assert_eq!(c1.name, "New Version");
        let c2 = result
            .iter()
            .find(|c| c.community_address == "community2")
            .unwrap();
        assert_eq!(c2.name, "Another Community");
    }

    #[tokio::test]
    async fn test_find_all_same_timestamp_keeps_last_entry() {
        let mut mocks = Mocks::new().with_member_stats();
        mocks.community.expect_list_visible().returning(|| {
            Ok(vec![
                community("community1", 1000, "First Entry"),
                community("community1", 1000, "Second Entry"),
            ])
        });
        let service = mocks.into_service();

        let result = service.find_all(None).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Second Entry");
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let mut mocks = Mocks::new();
        mocks.community.expect_list_visible().returning(|| Ok(vec![]));
        let service = mocks.into_service();

        let result = service.find_all(None).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_marks_joined_for_user() {
        let mut mocks = Mocks::new().with_member_stats();
        mocks.community.expect_list_visible().returning(|| {
            Ok(vec![
                community("joined", 1000, "Joined"),
                community("other", 1000, "Other"),
            ])
        });
        mocks
            .member
            .expect_is_member()
            .returning(|addr, user| Ok(addr == "joined" && user == USER_ADDRESS));
        let service = mocks.into_service();

        let result = service.find_all(Some(USER_ADDRESS)).await.unwrap();

        let joined = result.iter().find(|c| c.community_address == "joined").unwrap();
        let other = result.iter().find(|c| c.community_address == "other").unwrap();
        assert!(joined.is_joined);
        assert!(!other.is_joined);
    }

    // ---- find_one ----

    #[tokio::test]
    async fn test_find_one_returns_community() {
        let mut mocks = Mocks::new().with_member_stats();
        mocks
            .community
            .expect_find_by_address()
            .with(eq(COMMUNITY_ADDRESS))
            .times(1)
            .returning(|addr| Ok(vec![community(addr, 1000, "Test Community")]));
        let service = mocks.into_service();

        let result = service.find_one(COMMUNITY_ADDRESS, None).await.unwrap();

        assert_eq!(result.community_address, COMMUNITY_ADDRESS);
        assert_eq!(result.name, "Test Community");
        assert_eq!(result.total_members, 5);
    }

    #[tokio::test]
    async fn test_find_one_picks_latest_version() {
        let mut mocks = Mocks::new().with_member_stats();
        mocks.community.expect_find_by_address().returning(|addr| {
            Ok(vec![
                community(addr, 3000, "Newest"),
                community(addr, 1000, "Oldest"),
            ])
        });
        let service = mocks.into_service();

        let result = service.find_one(COMMUNITY_ADDRESS, None).await.unwrap();
        assert_eq!(result.name, "Newest");
    }

    #[tokio::test]
    async fn test_find_one_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .community
            .expect_find_by_address()
            .returning(|_| Ok(vec![]));
        let service = mocks.into_service();

        let err = service.find_one("nonexistent", None).await.unwrap_err();
        assert!(matches!(err, AppError::CommunityNotFound(ref addr) if addr == "nonexistent"));
    }

    // ---- update_visibility ----

    #[tokio::test]
    async fn test_update_visibility() {
        let mut mocks = Mocks::new().with_member_stats();
        mocks
            .community
            .expect_set_hidden()
            .with(eq(COMMUNITY_ADDRESS), eq(true))
            .times(1)
            .returning(|_, _| Ok(1));
        mocks.community.expect_find_by_address().returning(|addr| {
            let mut hidden = community(addr, 1000, "Test Community");
            hidden.is_hidden = true;
            Ok(vec![hidden])
        });
        let service = mocks.into_service();

        let result = service
            .update_visibility(COMMUNITY_ADDRESS, true)
            .await
            .unwrap();
        assert!(result.is_hidden);
    }

    #[tokio::test]
    async fn test_update_visibility_not_found_when_nothing_updated() {
        let mut mocks = Mocks::new();
        mocks.community.expect_set_hidden().returning(|_, _| Ok(0));
        mocks.community.expect_find_by_address().never();
        let service = mocks.into_service();

        let err = service
            .update_visibility(COMMUNITY_ADDRESS, true)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CommunityNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_visibility_row_not_found_maps_to_404() {
        let mut mocks = Mocks::new();
        mocks
            .community
            .expect_set_hidden()
            .returning(|_, _| Err(AppError::Database(sqlx::Error::RowNotFound)));
        let service = mocks.into_service();

        let err = service
            .update_visibility(COMMUNITY_ADDRESS, false)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CommunityNotFound(_)));
    }

    #[tokio::test]
    async fn test_update_visibility_passes_through_other_errors() {
        let mut mocks = Mocks::new();
        mocks
            .community
            .expect_set_hidden()
            .returning(|_, _| Err(AppError::Database(sqlx::Error::PoolTimedOut)));
        let service = mocks.into_service();

        let err = service
            .update_visibility(COMMUNITY_ADDRESS, false)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    // ---- find_members ----

    #[tokio::test]
    async fn test_find_members() {
        let mut mocks = Mocks::new();
        mocks
            .member
            .expect_list_by_community()
            .with(eq("TEST_CONTRACT_ADDRESS"))
            .returning(|_| Ok(vec![member("USER_1", 100, true), member("USER_2", 50, false)]));
        let service = mocks.into_service();

        let result = service.find_members("TEST_CONTRACT_ADDRESS").await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].user_address, "USER_1");
        assert!(result[0].is_manager);
        assert_eq!(result[1].points, 50);
        assert_eq!(
            result[0].last_indexed_at.to_rfc3339(),
            "2021-07-01T00:00:00+00:00"
        );
    }

    #[tokio::test]
    async fn test_find_members_not_found() {
        let mut mocks = Mocks::new();
        mocks
            .member
            .expect_list_by_community()
            .returning(|_| Ok(vec![]));
        let service = mocks.into_service();

        let err = service.find_members("TEST_CONTRACT_ADDRESS").await.unwrap_err();
        assert!(matches!(err, AppError::MembersNotFound(_)));
    }

    // ---- find_badges ----

    #[tokio::test]
    async fn test_find_badges_without_user() {
        let mut mocks = Mocks::new();
        mocks
            .badge
            .expect_list_by_community()
            .returning(|_| Ok(vec![badge("ISSUER_1", "Badge 1", 100, "Custom")]));
        mocks.user_badge.expect_list_by_user_and_community().never();
        let service = mocks.into_service();

        let result = service.find_badges(COMMUNITY_ADDRESS, None).await.unwrap();

        assert_eq!(result.total_badges, 1);
        assert_eq!(result.community_badges[0].badge_type, "Custom");
        assert_eq!(result.community_badges[0].user_has, None);
        assert_eq!(result.badges_count, None);
        assert_eq!(result.users_points, None);
    }

    #[tokio::test]
    async fn test_find_badges_with_user_marks_owned() {
        let mut mocks = Mocks::new();
        mocks.badge.expect_list_by_community().returning(|_| {
            Ok(vec![
                badge("ISSUER_1", "Badge 1", 100, "Custom"),
                badge("ISSUER_2", "Badge 2", 50, "Stellar"),
            ])
        });
        mocks
            .user_badge
            .expect_list_by_user_and_community()
            .with(eq(USER_ADDRESS), eq(COMMUNITY_ADDRESS))
            .returning(|_, _| Ok(vec![user_badge("ISSUER_1", "Badge 1")]));
        mocks
            .member
            .expect_points_for()
            .returning(|_, _| Ok(Some(100)));
        let service = mocks.into_service();

        let result = service
            .find_badges(COMMUNITY_ADDRESS, Some(USER_ADDRESS))
            .await
            .unwrap();

        assert_eq!(result.total_badges, 2);
        assert_eq!(result.badges_count, Some(1));
        assert_eq!(result.users_points, Some(100));
        assert_eq!(result.community_badges[0].user_has, Some(true));
        assert_eq!(result.community_badges[1].user_has, Some(false));
    }

    #[tokio::test]
    async fn test_find_badges_same_name_other_issuer_not_owned() {
        let mut mocks = Mocks::new();
        mocks
            .badge
            .expect_list_by_community()
            .returning(|_| Ok(vec![badge("ISSUER_2", "Badge 1", 10, "Custom")]));
        mocks
            .user_badge
            .expect_list_by_user_and_community()
            .returning(|_, _| Ok(vec![user_badge("ISSUER_1", "Badge 1")]));
        mocks.member.expect_points_for().returning(|_, _| Ok(None));
        let service = mocks.into_service();

        let result = service
            .find_badges(COMMUNITY_ADDRESS, Some(USER_ADDRESS))
            .await
            .unwrap();

        assert_eq!(result.community_badges[0].user_has, Some(false));
        assert_eq!(result.users_points, Some(0));
    }

    #[tokio::test]
    async fn test_find_badges_not_found() {
        let mut mocks = Mocks::new();
        mocks.badge.expect_list_by_community().returning(|_| Ok(vec![]));
        let service = mocks.into_service();

        let err = service
            .find_badges(COMMUNITY_ADDRESS, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CommunityBadgesNotFound(_)));
    }

    // ---- 用户维度 ----

    #[tokio::test]
    async fn test_find_created_communities() {
        let mut mocks = Mocks::new();
        mocks
            .community
            .expect_list_by_creator()
            .with(eq(USER_ADDRESS))
            .returning(|_| Ok(vec![community(COMMUNITY_ADDRESS, 1000, "Test Community")]));
        let service = mocks.into_service();

        let result = service.find_created_communities(USER_ADDRESS).await.unwrap();
        assert_eq!(result, vec![community(COMMUNITY_ADDRESS, 1000, "Test Community")]);
    }

    #[tokio::test]
    async fn test_find_hidden_communities() {
        let mut mocks = Mocks::new();
        mocks
            .community
            .expect_list_hidden_by_creator()
            .with(eq(USER_ADDRESS))
            .returning(|_| {
                let mut c = community(COMMUNITY_ADDRESS, 1000, "Hidden");
                c.is_hidden = true;
                Ok(vec![c])
            });
        let service = mocks.into_service();

        let result = service.find_hidden_communities(USER_ADDRESS).await.unwrap();
        assert_eq!(result.len(), 1);
        assert!(result[0].is_hidden);
    }

    #[tokio::test]
    async fn test_find_joined_communities() {
        let mut mocks = Mocks::new();
        mocks
            .member
            .expect_list_community_addresses_for_user()
            .with(eq(USER_ADDRESS))
            .returning(|_| {
                Ok(vec![
                    "TEST_CONTRACT_ADDRESS".to_string(),
                    "TEST_CONTRACT_ADDRESS".to_string(),
                ])
            });
        mocks
            .user_badge
            .expect_list_by_user_and_community()
            .returning(|_, _| Ok(vec![user_badge("ISSUER_1", "Badge 1")]));
        mocks
            .member
            .expect_points_for()
            .returning(|_, _| Ok(Some(75)));
        mocks
            .community
            .expect_list_by_addresses()
            .withf(|addrs: &[String]| addrs == ["TEST_CONTRACT_ADDRESS".to_string()])
            .times(1)
            .returning(|_| Ok(vec![community("TEST_CONTRACT_ADDRESS", 1000, "Joined")]));
        let service = mocks.into_service();

        let result = service.find_joined_communities(USER_ADDRESS).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].community.name, "Joined");
        assert_eq!(result[0].users_badges_count, 1);
        assert_eq!(result[0].users_points, 75);
    }

    #[tokio::test]
    async fn test_find_joined_communities_none() {
        let mut mocks = Mocks::new();
        mocks
            .member
            .expect_list_community_addresses_for_user()
            .returning(|_| Ok(vec![]));
        mocks
            .community
            .expect_list_by_addresses()
            .returning(|_| Ok(vec![]));
        let service = mocks.into_service();

        let result = service.find_joined_communities(USER_ADDRESS).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_find_user_badges() {
        let mut mocks = Mocks::new();
        mocks
            .user_badge
            .expect_list_by_user()
            .with(eq(USER_ADDRESS))
            .returning(|_| Ok(vec![user_badge("ISSUER_1", "Badge 1")]));
        let service = mocks.into_service();

        let result = service.find_user_badges(USER_ADDRESS).await.unwrap();

        assert_eq!(result[0].user_address, USER_ADDRESS);
        assert_eq!(result[0].issuer, "ISSUER_1");
        assert_eq!(result[0].badge_id.as_deref(), Some("badge-id-1"));
        assert_eq!(result[0].community_id.as_deref(), Some("community-id-1"));
        assert_eq!(
            result[0].community_member_id.as_deref(),
            Some("community-member-id-1")
        );
    }

    #[tokio::test]
    async fn test_find_user_badges_not_found() {
        let mut mocks = Mocks::new();
        mocks.user_badge.expect_list_by_user().returning(|_| Ok(vec![]));
        let service = mocks.into_service();

        let err = service.find_user_badges(USER_ADDRESS).await.unwrap_err();
        assert!(matches!(err, AppError::UserBadgesNotFound(_)));
    }

    #[tokio::test]
    async fn test_user_badge_stats_non_member() {
        let mut mocks = Mocks::new();
        mocks
            .user_badge
            .expect_list_by_user_and_community()
            .returning(|_, _| Ok(vec![]));
        mocks.member.expect_points_for().returning(|_, _| Ok(None));
        let service = mocks.into_service();

        let stats = service
            .user_badge_stats(USER_ADDRESS, COMMUNITY_ADDRESS)
            .await
            .unwrap();
        assert_eq!(stats, UserBadgeStats::default());
    }
}
