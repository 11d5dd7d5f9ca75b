use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::matches::{
    CreateGoalParams, CreateMatchParams, Goal, GoalDetail, GoalType, Match, MatchWithTeams,
    ScoredMatch,
};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMatchParams) -> Result<Match, DbErr> {
        let fixture = entity::matches::ActiveModel {
            season_id: ActiveValue::Set(params.season_id),
            team1_id: ActiveValue::Set(params.team1_id),
            team2_id: ActiveValue::Set(params.team2_id),
            match_time: ActiveValue::Set(params.match_time),
            stadium: ActiveValue::Set(params.stadium),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Match::from_entity(fixture))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Match>, DbErr> {
        let fixture = entity::prelude::Matches::find_by_id(id).one(self.db).await?;

        Ok(fixture.map(Match::from_entity))
    }

    /// Gets a match with both team names resolved.
    pub async fn get_with_teams(&self, id: i32) -> Result<Option<MatchWithTeams>, DbErr> {
        let Some(fixture) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut with_teams = self.attach_team_names(vec![fixture]).await?;

        Ok(with_teams.pop())
    }

    /// Gets matches in kickoff order, optionally limited to one season.
    pub async fn get_all(&self, season_id: Option<i32>) -> Result<Vec<MatchWithTeams>, DbErr> {
        let fixtures = self.find_fixtures(season_id).await?;

        self.attach_team_names(fixtures).await
    }

    /// Gets matches with all of their goal events, optionally limited to one season.
    pub async fn get_scored(&self, season_id: Option<i32>) -> Result<Vec<ScoredMatch>, DbErr> {
        let fixtures = self.find_fixtures(season_id).await?;
        if fixtures.is_empty() {
            return Ok(Vec::new());
        }

        let match_ids: Vec<i32> = fixtures.iter().map(|m| m.id).collect();
        let mut goals_by_match: HashMap<i32, Vec<Goal>> = HashMap::new();
        for goal in entity::prelude::Goal::find()
            .filter(entity::goal::Column::MatchId.is_in(match_ids))
            .all(self.db)
            .await?
        {
            goals_by_match
                .entry(goal.match_id)
                .or_default()
                .push(Goal::from_entity(goal));
        }

        Ok(fixtures
            .into_iter()
            .map(|fixture| ScoredMatch {
                goals: goals_by_match.remove(&fixture.id).unwrap_or_default(),
                fixture,
            })
            .collect())
    }

    /// Counts the matches a team plays in, on either side.
    pub async fn count_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Matches::find()
            .filter(
                Condition::any()
                    .add(entity::matches::Column::Team1Id.eq(team_id))
                    .add(entity::matches::Column::Team2Id.eq(team_id)),
            )
            .count(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Matches::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_fixtures(&self, season_id: Option<i32>) -> Result<Vec<Match>, DbErr> {
        let mut query = entity::prelude::Matches::find();
        if let Some(season_id) = season_id {
            query = query.filter(entity::matches::Column::SeasonId.eq(season_id));
        }

        let fixtures = query
            .order_by_asc(entity::matches::Column::MatchTime)
            .order_by_asc(entity::matches::Column::Id)
            .all(self.db)
            .await?;

        Ok(fixtures.into_iter().map(Match::from_entity).collect())
    }

    async fn attach_team_names(&self, fixtures: Vec<Match>) -> Result<Vec<MatchWithTeams>, DbErr> {
        let team_ids: HashSet<i32> = fixtures
            .iter()
            .flat_map(|m| [m.team1_id, m.team2_id])
            .collect();
        let names = team_names(self.db, team_ids.into_iter().collect()).await?;

        Ok(fixtures
            .into_iter()
            .map(|fixture| MatchWithTeams {
                team1_name: names.get(&fixture.team1_id).cloned().unwrap_or_default(),
                team2_name: names.get(&fixture.team2_id).cloned().unwrap_or_default(),
                fixture,
            })
            .collect())
    }
}

pub struct GoalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GoalRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGoalParams) -> Result<Goal, DbErr> {
        let goal = entity::goal::ActiveModel {
            match_id: ActiveValue::Set(params.match_id),
            team_id: ActiveValue::Set(params.team_id),
            player_id: ActiveValue::Set(params.player_id),
            goal_type_id: ActiveValue::Set(params.goal_type_id),
            minute: ActiveValue::Set(params.minute),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Goal::from_entity(goal))
    }

    /// Gets a match's goal events with team, player and goal type names.
    ///
    /// Goals are returned in insertion order; callers that need chronological order
    /// sort them through the match result calculation.
    pub async fn get_details_by_match(&self, match_id: i32) -> Result<Vec<GoalDetail>, DbErr> {
        let goals = entity::prelude::Goal::find()
            .filter(entity::goal::Column::MatchId.eq(match_id))
            .order_by_asc(entity::goal::Column::Id)
            .all(self.db)
            .await?;
        if goals.is_empty() {
            return Ok(Vec::new());
        }

        let team_ids: HashSet<i32> = goals.iter().map(|g| g.team_id).collect();
        let player_ids: HashSet<i32> = goals.iter().map(|g| g.player_id).collect();
        let type_ids: HashSet<i32> = goals.iter().map(|g| g.goal_type_id).collect();

        let teams = team_names(self.db, team_ids.into_iter().collect()).await?;
        let players: HashMap<i32, String> = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect();
        let goal_types: HashMap<i32, String> = entity::prelude::GoalType::find()
            .filter(entity::goal_type::Column::Id.is_in(type_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        Ok(goals
            .into_iter()
            .map(|goal| GoalDetail {
                team_name: teams.get(&goal.team_id).cloned().unwrap_or_default(),
                player_name: players.get(&goal.player_id).cloned().unwrap_or_default(),
                goal_type_name: goal_types.get(&goal.goal_type_id).cloned().unwrap_or_default(),
                goal: Goal::from_entity(goal),
            })
            .collect())
    }

    /// Counts the goals scored by any of the given players.
    pub async fn count_by_players(&self, player_ids: Vec<i32>) -> Result<u64, DbErr> {
        if player_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Goal::find()
            .filter(entity::goal::Column::PlayerId.is_in(player_ids))
            .count(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Goal::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

pub struct GoalTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GoalTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GoalType>, DbErr> {
        let goal_type = entity::prelude::GoalType::find_by_id(id).one(self.db).await?;

        Ok(goal_type.map(GoalType::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<GoalType>, DbErr> {
        let types = entity::prelude::GoalType::find()
            .order_by_asc(entity::goal_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(types.into_iter().map(GoalType::from_entity).collect())
    }
}

async fn team_names<C: ConnectionTrait>(
    db: &C,
    ids: Vec<i32>,
) -> Result<HashMap<i32, String>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::Team::find()
        .filter(entity::team::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|t| (t.id, t.name))
        .collect())
}
